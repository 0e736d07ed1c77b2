// src/executor/builtin/mod.rs
mod core;

use crate::error::ShellError;
use crate::shell::{Flow, Shell};
use std::io::Write;

/// The fixed set of commands handled in-process
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    Exit,
    Echo,
    Type,
    Pwd,
    Cd,
}

impl Builtin {
    pub const ALL: [Builtin; 5] = [
        Builtin::Exit,
        Builtin::Echo,
        Builtin::Type,
        Builtin::Pwd,
        Builtin::Cd,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "exit" => Some(Builtin::Exit),
            "echo" => Some(Builtin::Echo),
            "type" => Some(Builtin::Type),
            "pwd"  => Some(Builtin::Pwd),
            "cd"   => Some(Builtin::Cd),
            _      => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Builtin::Exit => "exit",
            Builtin::Echo => "echo",
            Builtin::Type => "type",
            Builtin::Pwd  => "pwd",
            Builtin::Cd   => "cd",
        }
    }
}

/// Run a builtin with the unparsed remainder of its line
pub fn run_builtin(
    shell: &Shell,
    builtin: Builtin,
    rest: &str,
    out: &mut dyn Write,
) -> Result<Flow, ShellError> {
    match builtin {
        Builtin::Exit => return Ok(core::builtin_exit(rest)),
        Builtin::Echo => core::builtin_echo(rest, out)?,
        Builtin::Type => core::builtin_type(shell, rest, out)?,
        Builtin::Pwd  => core::builtin_pwd(out)?,
        Builtin::Cd   => core::builtin_cd(shell, rest)?,
    }
    Ok(Flow::Continue)
}
