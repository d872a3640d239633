use std::path::PathBuf;

use clap::Parser;

use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "style-guard")]
#[command(author, version, about = "Python style checker - fixed rule catalog S001-S012")]
#[command(long_about = "Checks Python sources against a fixed catalog of style rules.\n\n\
    Exit codes:\n  \
    0 - No issues found\n  \
    1 - Style issues found\n  \
    2 - Usage or runtime error")]
pub struct Cli {
    /// File or directory to check
    pub path: PathBuf,

    /// File name suffix selecting which directory entries to check
    #[arg(long, default_value = "py")]
    pub ext: String,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
