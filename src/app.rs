//! Top-level application orchestration.
//!
//! `src/main.rs` stays tiny; this module is the "real main" that:
//! - parses CLI arguments and loads settings
//! - uploads a document (or loads a saved response)
//! - interprets the response and prints the summary
//! - writes optional exports

use std::io;
use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use crate::cli::{Command, ProcessArgs, ShowArgs, TuiArgs};
use crate::config::Settings;
use crate::error::AppError;
use crate::report::{Render, TextRender};
use crate::upload::ExtractionClient;

use self::pipeline::RunOutput;

pub mod pipeline;

/// Entry point for the `autoform` binary.
pub fn run() -> Result<(), AppError> {
    // `autoform` and `autoform --api-url ...` behave like `autoform tui ...`.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);
    let settings = Settings::from_env()?;

    match cli.command {
        Command::Process(args) => {
            crate::logging::init(settings.debug);
            handle_process(args, settings)
        }
        Command::Show(args) => {
            crate::logging::init(settings.debug);
            handle_show(args)
        }
        // The TUI owns the terminal, so no log subscriber is installed.
        Command::Tui(args) => handle_tui(args, settings),
    }
}

fn handle_process(args: ProcessArgs, settings: Settings) -> Result<(), AppError> {
    let settings = settings.with_api_url(args.api_url.as_deref());
    let path = match &args.file {
        Some(path) => path.clone(),
        None => crate::cli::picker::prompt_for_pdf_path()?,
    };

    let client = ExtractionClient::from_settings(&settings)?;
    let run = pipeline::run_upload(&client, &path)?;

    if let Some(out) = &args.save_response {
        crate::io::write_response_json(out, &run.response)?;
        info!(path = %out.display(), "saved extraction response");
    }

    present(&run, args.sections, args.export.as_ref())
}

fn handle_show(args: ShowArgs) -> Result<(), AppError> {
    let response = crate::io::read_response_json(&args.response)?;
    let run = pipeline::run_with_response(response, args.response.display().to_string());
    present(&run, args.sections, args.export.as_ref())
}

fn handle_tui(args: TuiArgs, settings: Settings) -> Result<(), AppError> {
    let settings = settings.with_api_url(args.api_url.as_deref());
    crate::tui::run(&settings)
}

fn present(run: &RunOutput, sections: bool, export: Option<&PathBuf>) -> Result<(), AppError> {
    TextRender::new(io::stdout().lock()).render(&run.summary, &run.meta)?;

    if sections {
        println!("\n{}", crate::report::format_sections(&run.response.sections));
    }

    if let Some(path) = export {
        crate::io::write_summary_json(path, &run.to_summary_file())?;
        info!(path = %path.display(), "wrote summary export");
    }

    Ok(())
}

/// Rewrite argv so `autoform` defaults to `autoform tui`.
///
/// Rules:
/// - `autoform`                      -> `autoform tui`
/// - `autoform --api-url URL`        -> `autoform tui --api-url URL`
/// - `autoform --help/--version/-h`  -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("tui".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "process" | "show" | "tui");
    if is_subcommand {
        return argv;
    }

    if arg1.starts_with('-') {
        argv.insert(1, "tui".to_string());
        return argv;
    }

    argv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bare_invocation_opens_tui() {
        assert_eq!(rewrite_args(args(&["autoform"])), args(&["autoform", "tui"]));
    }

    #[test]
    fn leading_flags_go_to_tui() {
        assert_eq!(
            rewrite_args(args(&["autoform", "--api-url", "http://x"])),
            args(&["autoform", "tui", "--api-url", "http://x"])
        );
    }

    #[test]
    fn subcommands_and_help_untouched() {
        for list in [
            &["autoform", "process", "-f", "a.pdf"][..],
            &["autoform", "show", "--response", "r.json"][..],
            &["autoform", "--help"][..],
            &["autoform", "-V"][..],
        ] {
            assert_eq!(rewrite_args(args(list)), args(list));
        }
    }
}
