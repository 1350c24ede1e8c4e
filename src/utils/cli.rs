//! Command-line argument parsing for jekyll-publisher.
//!
//! The binary takes exactly one positional argument: the path to the Jekyll site.
//! Anything else prints the usage and exits with status 1.

use std::path::PathBuf;

pub enum CliAction {
    Run(PathBuf),
    Exit(i32),
}

pub const USAGE: &str = "Usage: jekyll-publisher <SITE_PATH>";

/// Reads `std::env::args` and decides what to do.
pub fn handle_args() -> CliAction {
    let action = parse_args(std::env::args().skip(1));
    if let CliAction::Exit(_) = action {
        print_usage();
    }
    action
}

/// Parses the arguments after the program name.
pub fn parse_args<I>(args: I) -> CliAction
where
    I: IntoIterator<Item = String>,
{
    let args: Vec<String> = args.into_iter().collect();
    match args.as_slice() {
        [path] if !path.trim().is_empty() => CliAction::Run(PathBuf::from(path)),
        _ => CliAction::Exit(1),
    }
}

fn print_usage() {
    println!("Please provide the path to the Jekyll site as an argument.");
    println!("{USAGE}");
}
