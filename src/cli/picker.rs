//! Interactive PDF picker.
//!
//! Used by `autoform process` when no `-f` is given, and by the TUI for its file
//! list. PDFs are searched for under the current working directory.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::AppError;
use crate::upload::is_pdf_path;

/// Default directory recursion depth for finding PDF files.
const DEFAULT_SEARCH_DEPTH: usize = 4;

/// Prompt the user to select a PDF from the current directory tree.
///
/// Accepts a number from the list or an explicit path; `q` cancels.
pub fn prompt_for_pdf_path() -> Result<PathBuf, AppError> {
    let files = discover_pdf_files();
    if files.is_empty() {
        return Err(AppError::usage(
            "No .pdf files found. Provide one with `autoform process -f <file.pdf>`.",
        ));
    }

    println!("Found {} PDF file(s):", files.len());
    for (idx, path) in files.iter().enumerate() {
        println!("{:>3}) {}", idx + 1, pretty_path(path));
    }

    loop {
        print!("Select a file by number (1-{}) or type a path (q to quit): ", files.len());
        io::stdout()
            .flush()
            .map_err(|e| AppError::usage(format!("Failed to write prompt: {e}")))?;

        let mut input = String::new();
        let bytes = io::stdin()
            .read_line(&mut input)
            .map_err(|e| AppError::usage(format!("Failed to read input: {e}")))?;

        if bytes == 0 {
            return Err(AppError::usage(
                "No input received. Provide a PDF path with `autoform process -f <file.pdf>`.",
            ));
        }

        match parse_choice(input.trim(), &files) {
            Choice::Quit => return Err(AppError::usage("Canceled.")),
            Choice::Path(path) => return Ok(path),
            Choice::Invalid(msg) => println!("{msg}"),
        }
    }
}

#[derive(Debug, PartialEq)]
enum Choice {
    Quit,
    Path(PathBuf),
    Invalid(String),
}

fn parse_choice(input: &str, files: &[PathBuf]) -> Choice {
    if input.eq_ignore_ascii_case("q") {
        return Choice::Quit;
    }
    if let Ok(choice) = input.parse::<usize>() {
        if (1..=files.len()).contains(&choice) {
            return Choice::Path(files[choice - 1].clone());
        }
        return Choice::Invalid(format!(
            "Invalid choice: {choice}. Enter a number between 1 and {}.",
            files.len()
        ));
    }

    let candidate = PathBuf::from(input);
    if !candidate.is_file() {
        return Choice::Invalid(format!("File not found: {}", candidate.display()));
    }
    if !is_pdf_path(&candidate) {
        return Choice::Invalid(format!("Not a PDF: {}", candidate.display()));
    }
    Choice::Path(candidate)
}

/// Discover `*.pdf` files under the current directory (deterministic order).
pub fn discover_pdf_files() -> Vec<PathBuf> {
    find_pdf_files(Path::new("."), DEFAULT_SEARCH_DEPTH)
}

fn find_pdf_files(root: &Path, max_depth: usize) -> Vec<PathBuf> {
    let mut out = Vec::new();
    find_pdf_files_inner(root, 0, max_depth, &mut out);
    out.sort_by_key(|p| pretty_path(p));
    out
}

fn find_pdf_files_inner(root: &Path, depth: usize, max_depth: usize, out: &mut Vec<PathBuf>) {
    if depth > max_depth {
        return;
    }

    let Ok(entries) = fs::read_dir(root) else {
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        let Ok(file_type) = entry.file_type() else {
            continue;
        };

        if file_type.is_dir() {
            if !should_skip_dir(&path) {
                find_pdf_files_inner(&path, depth + 1, max_depth, out);
            }
        } else if file_type.is_file() && is_pdf_path(&path) {
            out.push(path);
        }
    }
}

fn should_skip_dir(path: &Path) -> bool {
    let name = path.file_name().and_then(|s| s.to_str()).unwrap_or("");
    matches!(name, ".git" | "target" | "node_modules")
}

pub fn pretty_path(path: &Path) -> String {
    let stripped = path.strip_prefix("./").unwrap_or(path);
    stripped.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_pdfs_sorted_and_skips_build_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("b")).unwrap();
        fs::create_dir_all(root.join("target")).unwrap();
        fs::write(root.join("b/z.pdf"), b"").unwrap();
        fs::write(root.join("a.PDF"), b"").unwrap();
        fs::write(root.join("notes.txt"), b"").unwrap();
        fs::write(root.join("target/skip.pdf"), b"").unwrap();

        let found = find_pdf_files(root, DEFAULT_SEARCH_DEPTH);
        let names: Vec<_> = found
            .iter()
            .map(|p| p.strip_prefix(root).unwrap().to_path_buf())
            .collect();
        assert_eq!(names, vec![PathBuf::from("a.PDF"), PathBuf::from("b/z.pdf")]);
    }

    #[test]
    fn parses_choices() {
        let files = vec![PathBuf::from("one.pdf"), PathBuf::from("two.pdf")];
        assert_eq!(parse_choice("Q", &files), Choice::Quit);
        assert_eq!(parse_choice("2", &files), Choice::Path(PathBuf::from("two.pdf")));
        assert!(matches!(parse_choice("3", &files), Choice::Invalid(_)));
        assert!(matches!(parse_choice("nope.pdf", &files), Choice::Invalid(_)));
    }

    #[test]
    fn pretty_path_strips_dot_prefix() {
        assert_eq!(pretty_path(Path::new("./docs/cv.pdf")), "docs/cv.pdf");
        assert_eq!(pretty_path(Path::new("cv.pdf")), "cv.pdf");
    }
}
