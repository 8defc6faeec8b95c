// Resume analysis LLM prompt templates.
// All prompts for the analyze endpoint are defined here.

pub const RESUME_ANALYZE_PROMPT: &str = r#"Analyze the following resume.
**IMPORTANT**: Your response MUST be a single JSON object.
DO NOT include any conversational text, explanations, markdown code block wrappers (like ```json), or any other formatting outside the JSON object itself.
The JSON object should adhere to the following structure and contain these fields:

{
    "summary": "Experienced software engineer with expertise in Rust, distributed systems, and cloud platforms.",
    "skills": ["Rust", "Tokio", "AWS", "Docker", "REST APIs"],
    "industries": ["Tech", "Cloud Computing"],
    "suggested_companies": ["Google", "Amazon", "Microsoft"],
    "suggested_roles": ["Software Engineer", "Backend Developer"]
}

Here is the resume text to analyze:
{resume_text}

Please return ONLY the JSON object."#;
