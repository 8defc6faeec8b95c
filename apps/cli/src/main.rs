mod controller;
mod errors;
mod models;
mod render;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use console::style;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::controller::JobSearchSession;
use crate::errors::ActionError;
use crate::render::{render_analysis, render_results, render_status, StatusLine, ANALYSIS_FAILED};

/// Upload a resume, get an AI analysis of it, and search the web for
/// matching job openings.
#[derive(Debug, Parser)]
#[command(name = "jobscout", version)]
struct Cli {
    /// Path to the resume file (.pdf, .txt, or .md)
    resume: Option<PathBuf>,

    /// Base URL of the jobscout API
    #[arg(long, default_value = "http://localhost:8080")]
    server: String,

    /// Search the web for matching jobs after a successful analysis
    #[arg(long)]
    search: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Silent unless RUST_LOG opts in: every outcome the user needs is
    // rendered as styled text, not log lines.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let mut session = JobSearchSession::new(cli.server.trim_end_matches('/'));

    if cli.resume.is_some() {
        println!(
            "{}",
            render_status(&StatusLine::pending("Uploading and analyzing..."))
        );
    }

    match session.upload_and_analyze(cli.resume.as_deref()).await {
        Ok(analysis) => {
            println!(
                "{}",
                render_status(&StatusLine::success("Resume uploaded successfully!"))
            );
            println!();
            print!("{}", render_analysis(analysis));
        }
        Err(err @ ActionError::NoFileSelected) => {
            println!("{}", render_status(&StatusLine::error(err.to_string())));
            return ExitCode::FAILURE;
        }
        Err(err) => {
            println!(
                "{}",
                render_status(&StatusLine::error(format!("Error: {err}")))
            );
            println!("{ANALYSIS_FAILED}");
            return ExitCode::FAILURE;
        }
    }

    if cli.search {
        println!();
        println!(
            "{}",
            render_status(&StatusLine::pending(
                "Searching for jobs based on the analysis..."
            ))
        );
        match session.search().await {
            Ok(results) => print!("{}", render_results(&results)),
            Err(err @ ActionError::AnalysisMissing) => {
                println!("{err}");
                return ExitCode::FAILURE;
            }
            Err(err) => {
                println!(
                    "{}",
                    render_status(&StatusLine::error(format!("Error during web search: {err}")))
                );
                return ExitCode::FAILURE;
            }
        }
    } else if session.search_available() {
        println!();
        println!(
            "{}",
            style("Run again with --search to also look for matching jobs.").dim()
        );
    }

    ExitCode::SUCCESS
}
