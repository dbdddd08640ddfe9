use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
    process::Command,
    sync::Arc,
};

use log::{debug, trace};

use crate::{Error, Result};

/// Runs external programs and captures what they print.
pub trait CommandRunner {
    /// Runs the given program to completion and returns its standard output with surrounding
    /// whitespace removed.
    ///
    /// # Arguments
    /// * `program` - The name or path of the executable.
    /// * `args` - The arguments passed to the executable.
    fn run(&self, program: &str, args: &[&str]) -> Result<String>;
}

/// Runs programs as child processes of the current process.
#[derive(Debug, Clone, Default)]
pub struct SystemRunner {
    /// The working directory of the spawned programs. Inherited if not set.
    working_dir: Option<PathBuf>,
}

impl SystemRunner {
    /// Creates a runner spawning programs in the current working directory.
    pub fn new() -> SystemRunner {
        SystemRunner { working_dir: None }
    }

    /// Creates a runner spawning programs in the given directory.
    ///
    /// # Arguments
    /// * `dir` - The working directory of the spawned programs.
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> SystemRunner {
        SystemRunner {
            working_dir: Some(dir.as_ref().to_path_buf()),
        }
    }

    /// Returns the working directory of the spawned programs, if one was set.
    pub fn get_working_dir(&self) -> Option<&Path> {
        self.working_dir.as_deref()
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<String> {
        debug!("Running {} {}", program, args.join(" "));

        let mut command = Command::new(program);
        command.args(args);
        if let Some(dir) = &self.working_dir {
            command.current_dir(dir);
        }

        let output = command.output().map_err(|err| match err.kind() {
            ErrorKind::NotFound => Error::ToolNotFound(program.to_owned(), Arc::new(err)),
            _ => Error::ToolSpawn(program.to_owned(), Arc::new(err)),
        })?;

        if !output.status.success() {
            return Err(Error::ToolFailed {
                program: program.to_owned(),
                exit_code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_owned(),
            });
        }

        let stdout = String::from_utf8(output.stdout)
            .map_err(|err| Error::ToolOutputNotUtf8(program.to_owned(), err))?;
        trace!("{} printed {:?}", program, stdout);

        Ok(stdout.trim().to_owned())
    }
}

#[cfg(all(test, unix))]
mod test {
    use super::*;

    #[test]
    fn test_captures_trimmed_stdout() {
        let runner = SystemRunner::new();
        let out = runner.run("sh", &["-c", "echo '  10.2.0  '"]).unwrap();
        assert_eq!(out, "10.2.0");
    }

    #[test]
    fn test_missing_executable() {
        let runner = SystemRunner::new();
        let err = runner
            .run("this-executable-does-not-exist-anywhere", &["-dumpversion"])
            .unwrap_err();
        assert!(matches!(err, Error::ToolNotFound(..)));
    }

    #[test]
    fn test_non_zero_exit() {
        let runner = SystemRunner::new();
        let err = runner
            .run("sh", &["-c", "echo 'fatal: no names found' >&2; exit 128"])
            .unwrap_err();
        match err {
            Error::ToolFailed {
                program,
                exit_code,
                stderr,
            } => {
                assert_eq!(program, "sh");
                assert_eq!(exit_code, Some(128));
                assert_eq!(stderr, "fatal: no names found");
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_undecodable_output() {
        let runner = SystemRunner::new();
        let err = runner.run("sh", &["-c", "printf '\\377\\376'"]).unwrap_err();
        assert!(matches!(err, Error::ToolOutputNotUtf8(..)));
    }

    #[test]
    fn test_runs_in_working_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("marker.txt"), "2023.04.01\n").unwrap();

        let runner = SystemRunner::in_dir(dir.path());
        assert_eq!(runner.get_working_dir(), Some(dir.path()));
        assert_eq!(runner.run("cat", &["marker.txt"]).unwrap(), "2023.04.01");
    }
}
