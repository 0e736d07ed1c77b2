// src/env.rs
// Environment provider: the only way the core reads PATH and HOME

/// Read access to environment variables.
///
/// Values are looked up at the moment they are needed, nothing is cached.
pub trait Environment {
    fn var(&self, key: &str) -> Option<String>;
}

/// The real process environment
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

#[cfg(test)]
pub use test_support::{lock_cwd, MapEnv};
