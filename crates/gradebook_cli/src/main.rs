//! Grade book shell.
//!
//! # Responsibility
//! - Read line commands from stdin and print whatever the core returns.
//! - Keep every record rule inside `gradebook_core`.

mod command;

use gradebook_core::{init_logging, GradeBook, LoggingConfig};
use log::info;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = LoggingConfig::from_env();
    if let Err(err) = init_logging(&config) {
        eprintln!("warning: logging disabled: {err}");
    }

    let mut book = GradeBook::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                eprintln!("error: failed to read input: {err}");
                return ExitCode::FAILURE;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        let result = command::parse(&line).and_then(|parsed| command::execute(&mut book, parsed));
        let written = match result {
            Ok(Some(output)) => write!(stdout, "{output}"),
            Ok(None) => Ok(()),
            Err(err) => writeln!(stdout, "error: {err}"),
        };
        if let Err(err) = written.and_then(|()| stdout.flush()) {
            eprintln!("error: failed to write output: {err}");
            return ExitCode::FAILURE;
        }
    }

    info!(
        "event=shell_exit module=cli status=ok students={}",
        book.student_count()
    );
    ExitCode::SUCCESS
}
