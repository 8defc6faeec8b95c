//! Resume text extraction, dispatched on file extension.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("{0}")]
    UnsupportedFormat(String),

    #[error("could not read PDF: {0}")]
    Pdf(String),

    #[error("file is not valid UTF-8")]
    Encoding,

    #[error("no text could be extracted")]
    Empty,
}

/// Extracts plain text from an uploaded resume.
/// PDFs go through `pdf-extract`; `.txt` and `.md` are taken verbatim.
pub fn extract_resume_text(file_name: &str, data: &[u8]) -> Result<String, ExtractError> {
    let lower_name = file_name.to_lowercase();

    let text = if lower_name.ends_with(".pdf") {
        pdf_extract::extract_text_from_mem(data).map_err(|e| ExtractError::Pdf(e.to_string()))?
    } else if lower_name.ends_with(".txt") || lower_name.ends_with(".md") {
        String::from_utf8(data.to_vec()).map_err(|_| ExtractError::Encoding)?
    } else {
        return Err(ExtractError::UnsupportedFormat(file_name.to_string()));
    };

    if text.trim().is_empty() {
        return Err(ExtractError::Empty);
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_taken_verbatim() {
        let text = extract_resume_text("resume.txt", b"Rust engineer, 5 years").unwrap();
        assert_eq!(text, "Rust engineer, 5 years");
    }

    #[test]
    fn test_markdown_is_accepted() {
        let text = extract_resume_text("resume.md", b"# Jane Doe\nRust engineer").unwrap();
        assert!(text.contains("Jane Doe"));
    }

    #[test]
    fn test_extension_check_is_case_insensitive() {
        assert!(extract_resume_text("RESUME.TXT", b"hello").is_ok());
    }

    #[test]
    fn test_unknown_extension_is_rejected() {
        let err = extract_resume_text("resume.docx", b"...").unwrap_err();
        assert!(matches!(err, ExtractError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_invalid_utf8_text_file_is_rejected() {
        let err = extract_resume_text("resume.txt", &[0xff, 0xfe, 0x00]).unwrap_err();
        assert!(matches!(err, ExtractError::Encoding));
    }

    #[test]
    fn test_whitespace_only_content_is_rejected() {
        let err = extract_resume_text("resume.txt", b"  \n\t ").unwrap_err();
        assert!(matches!(err, ExtractError::Empty));
    }
}
