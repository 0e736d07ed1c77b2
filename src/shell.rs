// src/shell.rs
use crate::env::{Environment, ProcessEnv};
use anyhow::Result;
use std::io::Write;

/// What the read loop should do after a line has been handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit(i32),
}

pub struct Shell {
    env: Box<dyn Environment>,
}

impl Shell {
    pub fn new() -> Self {
        Self::with_env(Box::new(ProcessEnv))
    }

    pub fn with_env(env: Box<dyn Environment>) -> Self {
        Shell { env }
    }

    pub fn env(&self) -> &dyn Environment {
        self.env.as_ref()
    }

    /// Handle one input line, writing every response to `out`.
    ///
    /// Command failures are reported on `out` and do not surface here; only a
    /// broken output stream comes back as an error.
    pub fn eval(&self, line: &str, out: &mut dyn Write) -> Result<Flow> {
        let flow = crate::executor::dispatch(self, line, out)?;
        out.flush()?;
        Ok(flow)
    }

    pub fn build_prompt(&self) -> String {
        "$ ".to_string()
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new()
    }
}
