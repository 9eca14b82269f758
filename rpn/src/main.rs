use std::io;
use std::io::{BufRead, Write};
use std::process::ExitCode;

use clap::Parser;
use expressions::{calculate, Calculation, DEFAULT_CAPACITY};
use log::{info, LevelFilter};
use simple_logger::SimpleLogger;

type Result<A> = std::result::Result<A, io::Error>;

/// Reads one arithmetic expression from stdin, prints it in postfix order and then its value.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Maximum number of tokens accepted in the expression
    #[arg(long, default_value_t = DEFAULT_CAPACITY)]
    max_tokens: usize,
    /// Log more (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn level_filter(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

// Returns whether the expression was evaluated.
// Nothing reaches `out` unless the whole pipeline succeeds.
fn run(
    input: &mut impl BufRead,
    out: &mut impl Write,
    err: &mut impl Write,
    max_tokens: usize,
) -> Result<bool> {
    // Invalid UTF-8 becomes U+FFFD, which the lexer reports as an invalid character.
    let mut bytes = vec![];
    input.read_until(b'\n', &mut bytes)?;
    let line = String::from_utf8_lossy(&bytes);
    info!("read {:?}", line.trim_end());

    match calculate(&line, max_tokens) {
        Ok(Calculation { postfix, value }) => {
            writeln!(out, "{}", postfix)?;
            writeln!(out, "{}", value)?;
            Ok(true)
        }
        Err(e) => {
            writeln!(err, "{}", e)?;
            Ok(false)
        }
    }
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    if let Err(err) = SimpleLogger::new()
        .with_level(level_filter(args.verbose))
        .init()
    {
        eprintln!("could not initialize logging: {}", err);
    }

    let succeeded = run(
        &mut io::stdin().lock(),
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
        args.max_tokens,
    )?;

    if succeeded {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
