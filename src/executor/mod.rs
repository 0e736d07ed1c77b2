// src/executor/mod.rs - Dispatch and external command execution
pub mod builtin;
pub mod path;

use crate::error::ShellError;
use crate::parser::{split_command, tokenize};
use crate::shell::{Flow, Shell};
use anyhow::Result;
use builtin::Builtin;
use std::io::Write;
use std::process::{Command as Proc, Stdio};
use tracing::debug;

/// Route one line to a builtin or an external program.
///
/// The remainder after the command word is passed on untokenized; each
/// handler tokenizes it when it needs arguments.
pub fn dispatch(shell: &Shell, line: &str, out: &mut dyn Write) -> Result<Flow> {
    let (command, rest) = split_command(line);
    if command.is_empty() {
        return Ok(Flow::Continue);
    }

    let result = match Builtin::from_name(command) {
        Some(builtin) => {
            debug!(command, "builtin");
            builtin::run_builtin(shell, builtin, rest, out)
        }
        None => {
            debug!(command, "external");
            execute_external(shell, command, rest, out).map(|()| Flow::Continue)
        }
    };

    match result {
        Ok(flow) => Ok(flow),
        Err(ShellError::Io(e)) => Err(e.into()),
        Err(e) => {
            writeln!(out, "{e}")?;
            Ok(Flow::Continue)
        }
    }
}

/// Resolve `name` on the current search path, then run it with the
/// tokenized remainder and wait for it to finish.
///
/// The child inherits stdin, stdout and stderr. Its exit status is logged
/// but not reported back to the interpreter.
pub fn execute_external(
    shell: &Shell,
    name: &str,
    rest: &str,
    out: &mut dyn Write,
) -> Result<(), ShellError> {
    let search_path = path::search_path(shell.env());
    let program = path::resolve(name, &search_path)
        .ok_or_else(|| ShellError::CommandNotFound(name.to_string()))?;

    let args = tokenize(rest).map_err(|e| ShellError::parse(name, e))?;

    // Anything we printed must land before the child's output
    out.flush()?;
    crossterm::terminal::disable_raw_mode().ok();

    let mut cmd = build_command(&program, name, &args);
    debug!(command = name, program = %program.display(), ?args, "spawning");

    let status = cmd.status().map_err(|source| ShellError::Spawn {
        command: name.to_string(),
        source,
    })?;
    debug!(command = name, code = ?status.code(), "child exited");
    Ok(())
}

/// argv[0] is the command word as typed, not the resolved path
fn build_command(program: &std::path::Path, name: &str, args: &[String]) -> Proc {
    let mut cmd = Proc::new(program);
    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        cmd.arg0(name);
    }
    #[cfg(not(unix))]
    let _ = name;
    cmd.args(args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());
    cmd
}
