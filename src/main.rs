// src/main.rs
mod completion;
mod env;
mod error;
mod executor;
mod parser;
mod readline;
mod shell;

use anyhow::Result;
use clap::Parser;
use readline::{ReadlineError, ShellReadline};
use shell::{Flow, Shell};
use std::io::{self, BufRead, IsTerminal, Write};
use tracing_subscriber::EnvFilter;

/// tinysh - a minimal interactive command interpreter
#[derive(Parser, Debug)]
#[command(name = "tinysh", version, about)]
struct Args {
    /// Run a single command line and exit
    #[arg(short = 'c', value_name = "LINE")]
    command: Option<String>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, env = "TINYSH_LOG", default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level)),
        )
        .init();

    let shell = Shell::new();

    let flow = match args.command {
        Some(line) => shell.eval(&line, &mut io::stdout())?,
        None if io::stdin().is_terminal() => run_interactive(&shell)?,
        None => run_piped(&shell)?,
    };

    if let Flow::Exit(code) = flow {
        std::process::exit(code);
    }
    Ok(())
}

fn run_interactive(shell: &Shell) -> Result<Flow> {
    let mut readline = ShellReadline::new();

    loop {
        match readline.readline(&shell.build_prompt()) {
            Ok(line) => {
                if let Flow::Exit(code) = shell.eval(&line, &mut io::stdout())? {
                    return Ok(Flow::Exit(code));
                }
            }

            // Ctrl+C cancels the current input, a new prompt follows
            Err(ReadlineError::Interrupted) => println!("^C"),

            Err(ReadlineError::Eof) => return Ok(Flow::Exit(0)),

            Err(ReadlineError::Other(e)) => anyhow::bail!("readline error: {e}"),
        }
    }
}

fn run_piped(shell: &Shell) -> Result<Flow> {
    let stdin = io::stdin();
    let mut lock = stdin.lock();
    let mut line = String::new();

    loop {
        line.clear();
        print!("{}", shell.build_prompt());
        io::stdout().flush()?;
        if lock.read_line(&mut line)? == 0 {
            return Ok(Flow::Exit(0));
        }

        let input = line.trim_end_matches(['\n', '\r']);
        if let Flow::Exit(code) = shell.eval(input, &mut io::stdout())? {
            return Ok(Flow::Exit(code));
        }
    }
}
