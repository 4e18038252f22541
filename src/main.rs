use std::process::ExitCode;

use clap::Parser;

use passfix::{CONFIRMATION, TARGET_PATH};

/// Remove the passing_score update block from the assessment service.
///
/// Run from the backend root; the target path is fixed.
#[derive(Parser)]
#[command(version, about)]
struct Cli {}

fn run() -> Result<ExitCode, ExitCode> {
    passfix::strip_file(TARGET_PATH).map_err(|e| {
        let cause = std::error::Error::source(&e)
            .map(|s| format!(": {s}"))
            .unwrap_or_default();
        eprintln!("error: {e}{cause}");
        ExitCode::from(1)
    })?;

    println!("{CONFIRMATION}");
    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    env_logger::init();
    let _cli = Cli::parse();
    match run() {
        Ok(code) => code,
        Err(code) => code,
    }
}
