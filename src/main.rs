use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;

use style_guard::analysis::{AnalysisCoordinator, FileReport};
use style_guard::cli::Cli;
use style_guard::output::{JsonFormatter, OutputFormat, OutputFormatter, TextFormatter};
use style_guard::scanner::{DirectoryScanner, ExtensionFilter};
use style_guard::{EXIT_ERROR, EXIT_ISSUES_FOUND, EXIT_SUCCESS};

fn main() {
    let cli = Cli::parse();
    std::process::exit(run(&cli));
}

fn run(cli: &Cli) -> i32 {
    match run_impl(cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_ERROR
        }
    }
}

fn run_impl(cli: &Cli) -> style_guard::Result<i32> {
    // 1. Resolve the input to a file list
    let files = collect_files(&cli.path, &cli.ext)?;

    // 2. Analyze each file in order; the first hard failure aborts the run
    let coordinator = AnalysisCoordinator::new();
    let mut reports = Vec::with_capacity(files.len());
    for path in files {
        let issues = coordinator.check_file(&path)?;
        reports.push(FileReport { path, issues });
    }

    // 3. Format output
    let output = format_output(cli.format, &reports)?;

    // 4. Write output
    write_output(cli.output.as_deref(), &output, cli.quiet)?;

    let has_issues = reports.iter().any(|r| !r.issues.is_empty());
    if has_issues {
        Ok(EXIT_ISSUES_FOUND)
    } else {
        Ok(EXIT_SUCCESS)
    }
}

fn collect_files(path: &Path, ext: &str) -> style_guard::Result<Vec<PathBuf>> {
    if path.is_dir() {
        let scanner = DirectoryScanner::new(Box::new(ExtensionFilter::new(ext)));
        scanner.scan(path)
    } else if path.is_file() {
        // An explicitly named file is checked regardless of its suffix
        Ok(vec![path.to_path_buf()])
    } else {
        Err(style_guard::StyleGuardError::Config(format!(
            "Path does not exist: {}",
            path.display()
        )))
    }
}

fn format_output(format: OutputFormat, reports: &[FileReport]) -> style_guard::Result<String> {
    match format {
        OutputFormat::Text => TextFormatter.format(reports),
        OutputFormat::Json => JsonFormatter.format(reports),
    }
}

fn write_output(output_path: Option<&Path>, content: &str, quiet: bool) -> style_guard::Result<()> {
    if let Some(path) = output_path {
        fs::write(path, content)?;
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
