use std::{
    io::{stdin, stdout, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;

use scanner::Scanner;

#[derive(clap::Parser)]
struct Args {
    file: Option<PathBuf>,
}

fn run_file(path: PathBuf) -> anyhow::Result<ExitCode> {
    log::debug!("scanning {}", path.display());
    let had_error = !run(&std::fs::read_to_string(path)?);
    // Same exit code a batch compiler would use for malformed input.
    Ok(if had_error { ExitCode::from(65) } else { ExitCode::SUCCESS })
}

fn run_prompt() -> anyhow::Result<ExitCode> {
    loop {
        print!("> ");
        stdout().flush()?;
        let mut line = String::new();
        if stdin().read_line(&mut line)? == 0 {
            return Ok(ExitCode::SUCCESS);
        }
        // Errors were already reported, the prompt just moves on.
        run(&line);
    }
}

/// Scans one source buffer, reporting diagnostics to stderr and the token
/// stream to stdout. Returns false if any scan error was collected.
fn run(source: &str) -> bool {
    let (tokens, errors) = Scanner::new(source).scan_tokens();
    if !errors.is_empty() {
        eprintln!("{}", errors);
    }
    for token in &tokens {
        println!("{}", token);
    }
    errors.is_empty()
}

fn main() -> anyhow::Result<ExitCode> {
    env_logger::init();
    let args = Args::parse();

    match args.file {
        Some(file) => run_file(file),
        None => run_prompt(),
    }
}
