//! Command-line parsing for the document summary client.
//!
//! Argument parsing and command dispatch stay separate from the interpretation
//! code; `app` turns these structs into pipeline calls.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod picker;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "autoform", version, about = "Upload a résumé PDF and summarize the extracted fields")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Upload a PDF to the extraction service and print the summary.
    Process(ProcessArgs),
    /// Summarize a previously saved extraction response (no network).
    Show(ShowArgs),
    /// Launch the interactive TUI.
    ///
    /// Lists PDFs under the current directory, uploads the selected one and
    /// shows the summary in four panels.
    Tui(TuiArgs),
}

#[derive(Debug, Parser, Clone)]
pub struct ProcessArgs {
    /// PDF to upload. Prompts with a list of discovered PDFs when omitted.
    #[arg(short = 'f', long, value_name = "PDF")]
    pub file: Option<PathBuf>,

    /// Extraction endpoint (overrides AUTOFORM_API_URL).
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Write the summary to a JSON file.
    #[arg(long, value_name = "JSON")]
    pub export: Option<PathBuf>,

    /// Save the raw service response for later `autoform show`.
    #[arg(long = "save-response", value_name = "JSON")]
    pub save_response: Option<PathBuf>,

    /// Also list the raw text sections the service detected.
    #[arg(long)]
    pub sections: bool,
}

#[derive(Debug, Parser, Clone)]
pub struct ShowArgs {
    /// Response JSON produced by `autoform process --save-response`.
    #[arg(long, value_name = "JSON")]
    pub response: PathBuf,

    /// Write the summary to a JSON file.
    #[arg(long, value_name = "JSON")]
    pub export: Option<PathBuf>,

    /// Also list the raw text sections the service detected.
    #[arg(long)]
    pub sections: bool,
}

#[derive(Debug, Parser, Clone, Default)]
pub struct TuiArgs {
    /// Extraction endpoint (overrides AUTOFORM_API_URL).
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_process_flags() {
        let cli = Cli::parse_from([
            "autoform",
            "process",
            "-f",
            "cv.pdf",
            "--export",
            "out.json",
            "--sections",
        ]);
        let Command::Process(args) = cli.command else {
            panic!("expected process");
        };
        assert_eq!(args.file, Some(PathBuf::from("cv.pdf")));
        assert_eq!(args.export, Some(PathBuf::from("out.json")));
        assert!(args.sections);
        assert!(args.save_response.is_none());
    }

    #[test]
    fn show_requires_response() {
        assert!(Cli::try_parse_from(["autoform", "show"]).is_err());
        let cli = Cli::parse_from(["autoform", "show", "--response", "r.json"]);
        assert!(matches!(cli.command, Command::Show(ref a) if a.response == PathBuf::from("r.json")));
    }
}
