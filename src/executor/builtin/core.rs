// src/executor/builtin/core.rs
use super::Builtin;
use crate::error::ShellError;
use crate::executor::path;
use crate::parser::tokenize;
use crate::shell::{Flow, Shell};
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;

/// Always exits; a leading integer argument becomes the status.
pub fn builtin_exit(rest: &str) -> Flow {
    let code = tokenize(rest)
        .ok()
        .and_then(|args| args.first().and_then(|arg| arg.parse::<i32>().ok()))
        .unwrap_or(0);
    Flow::Exit(code)
}

pub fn builtin_echo(rest: &str, out: &mut dyn Write) -> Result<(), ShellError> {
    let args = tokenize(rest).map_err(|e| ShellError::parse("echo", e))?;
    writeln!(out, "{}", args.join(" "))?;
    Ok(())
}

pub fn builtin_type(shell: &Shell, rest: &str, out: &mut dyn Write) -> Result<(), ShellError> {
    let args = tokenize(rest).map_err(|e| ShellError::parse("type", e))?;
    let Some(name) = args.first() else {
        writeln!(out)?;
        return Ok(());
    };

    if Builtin::from_name(name).is_some() {
        writeln!(out, "{name} is a shell builtin")?;
        return Ok(());
    }

    let search_path = path::search_path(shell.env());
    match path::resolve(name, &search_path) {
        Some(found) => writeln!(out, "{name} is {}", found.display())?,
        None => writeln!(out, "{name}: not found")?,
    }
    Ok(())
}

pub fn builtin_pwd(out: &mut dyn Write) -> Result<(), ShellError> {
    let cwd = std::env::current_dir().map_err(ShellError::Pwd)?;
    writeln!(out, "{}", cwd.display())?;
    Ok(())
}

pub fn builtin_cd(shell: &Shell, rest: &str) -> Result<(), ShellError> {
    let args = tokenize(rest).map_err(|e| ShellError::parse("cd", e))?;
    let target = match args.first().map(String::as_str) {
        None | Some("~") => home_dir(shell)?,
        Some(path) => PathBuf::from(path),
    };

    std::env::set_current_dir(&target).map_err(|_| ShellError::NoSuchDirectory {
        path: target.display().to_string(),
    })?;
    debug!(dir = %target.display(), "changed directory");
    Ok(())
}

fn home_dir(shell: &Shell) -> Result<PathBuf, ShellError> {
    shell
        .env()
        .var("HOME")
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
        .ok_or(ShellError::HomeNotSet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{lock_cwd, MapEnv};
    use std::fs;
    use tempfile::TempDir;

    fn shell(env: MapEnv) -> Shell {
        Shell::with_env(Box::new(env))
    }

    fn captured(f: impl FnOnce(&mut Vec<u8>) -> Result<(), ShellError>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    /// Restores the working directory when dropped
    struct CwdGuard(PathBuf);

    impl Drop for CwdGuard {
        fn drop(&mut self) {
            std::env::set_current_dir(&self.0).ok();
        }
    }

    fn save_cwd() -> CwdGuard {
        CwdGuard(std::env::current_dir().unwrap())
    }

    #[test]
    fn exit_defaults_to_success() {
        assert_eq!(builtin_exit(""), Flow::Exit(0));
        assert_eq!(builtin_exit("whatever"), Flow::Exit(0));
        assert_eq!(builtin_exit("'broken"), Flow::Exit(0));
    }

    #[test]
    fn exit_takes_numeric_status() {
        assert_eq!(builtin_exit("42"), Flow::Exit(42));
        assert_eq!(builtin_exit("'7' extra"), Flow::Exit(7));
    }

    #[test]
    fn echo_rejoins_tokens() {
        assert_eq!(captured(|out| builtin_echo("hello    world", out)), "hello world\n");
        assert_eq!(captured(|out| builtin_echo("'hello   world'", out)), "hello   world\n");
        assert_eq!(captured(|out| builtin_echo("", out)), "\n");
    }

    #[test]
    fn echo_parse_error_prints_nothing() {
        let mut out = Vec::new();
        let err = builtin_echo("'open", &mut out).unwrap_err();
        assert_eq!(err.to_string(), "echo: unterminated quote");
        assert!(out.is_empty());
    }

    #[test]
    fn type_reports_builtins() {
        let sh = shell(MapEnv::default());
        assert_eq!(captured(|out| builtin_type(&sh, "cd", out)), "cd is a shell builtin\n");
        assert_eq!(captured(|out| builtin_type(&sh, "type", out)), "type is a shell builtin\n");
    }

    #[test]
    fn type_is_idempotent() {
        let sh = shell(MapEnv::default());
        let first = captured(|out| builtin_type(&sh, "echo", out));
        let second = captured(|out| builtin_type(&sh, "echo", out));
        assert_eq!(first, second);
    }

    #[test]
    fn type_reports_missing_commands() {
        let dir = TempDir::new().unwrap();
        let sh = shell(MapEnv::default().with("PATH", dir.path().display().to_string()));
        assert_eq!(
            captured(|out| builtin_type(&sh, "nonexistent_xyz", out)),
            "nonexistent_xyz: not found\n"
        );
    }

    #[cfg(unix)]
    #[test]
    fn type_reports_resolved_path() {
        use std::os::unix::fs::PermissionsExt;

        let empty = TempDir::new().unwrap();
        let bin = TempDir::new().unwrap();
        let tool = bin.path().join("foo");
        fs::write(&tool, "#!/bin/sh\n").unwrap();
        fs::set_permissions(&tool, fs::Permissions::from_mode(0o755)).unwrap();

        let path = format!("{}:{}", empty.path().display(), bin.path().display());
        let sh = shell(MapEnv::default().with("PATH", path));
        assert_eq!(
            captured(|out| builtin_type(&sh, "foo extra", out)),
            format!("foo is {}\n", tool.display())
        );
    }

    #[test]
    fn type_without_argument_ends_the_line() {
        let sh = shell(MapEnv::default());
        assert_eq!(captured(|out| builtin_type(&sh, "", out)), "\n");
    }

    #[test]
    fn pwd_prints_current_dir() {
        let _lock = lock_cwd();
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(captured(|out| builtin_pwd(out)), format!("{}\n", cwd.display()));
    }

    #[test]
    fn cd_to_missing_dir_leaves_cwd_alone() {
        let _lock = lock_cwd();
        let before = std::env::current_dir().unwrap();
        let sh = shell(MapEnv::default());

        let err = builtin_cd(&sh, "/nonexistent/path").unwrap_err();
        assert_eq!(err.to_string(), "cd: /nonexistent/path: No such file or directory");
        assert_eq!(std::env::current_dir().unwrap(), before);
        assert_eq!(captured(|out| builtin_pwd(out)), format!("{}\n", before.display()));
    }

    #[test]
    fn cd_absolute_and_relative() {
        let _lock = lock_cwd();
        let _restore = save_cwd();
        let dir = TempDir::new().unwrap();
        let root = fs::canonicalize(dir.path()).unwrap();
        fs::create_dir(root.join("sub")).unwrap();
        let sh = shell(MapEnv::default());

        builtin_cd(&sh, &root.display().to_string()).unwrap();
        assert_eq!(std::env::current_dir().unwrap(), root);

        builtin_cd(&sh, "sub").unwrap();
        assert_eq!(std::env::current_dir().unwrap(), root.join("sub"));

        builtin_cd(&sh, "..").unwrap();
        assert_eq!(std::env::current_dir().unwrap(), root);
    }

    #[test]
    fn cd_quoted_path_with_spaces() {
        let _lock = lock_cwd();
        let _restore = save_cwd();
        let dir = TempDir::new().unwrap();
        let spaced = fs::canonicalize(dir.path()).unwrap().join("two words");
        fs::create_dir(&spaced).unwrap();
        let sh = shell(MapEnv::default());

        builtin_cd(&sh, &format!("'{}'", spaced.display())).unwrap();
        assert_eq!(std::env::current_dir().unwrap(), spaced);
    }

    #[test]
    fn cd_without_args_or_tilde_goes_home() {
        let _lock = lock_cwd();
        let _restore = save_cwd();
        let home = TempDir::new().unwrap();
        let home_path = fs::canonicalize(home.path()).unwrap();
        let other = TempDir::new().unwrap();
        let sh = shell(MapEnv::default().with("HOME", home_path.display().to_string()));

        builtin_cd(&sh, "").unwrap();
        assert_eq!(std::env::current_dir().unwrap(), home_path);

        std::env::set_current_dir(other.path()).unwrap();
        builtin_cd(&sh, "~").unwrap();
        assert_eq!(std::env::current_dir().unwrap(), home_path);
    }

    #[test]
    fn cd_to_missing_home_reports_home_path() {
        let _lock = lock_cwd();
        let sh = shell(MapEnv::default().with("HOME", "/nonexistent/home"));
        let err = builtin_cd(&sh, "").unwrap_err();
        assert_eq!(err.to_string(), "cd: /nonexistent/home: No such file or directory");
    }
}
