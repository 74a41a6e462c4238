use crate::error::{Result, EXIT_INTERNAL};
use crate::ui;
use std::cell::RefCell;
use std::process::{Command, ExitStatus, Stdio};

/// Executable whose presence on `PATH` means git-flow is installed
pub const GIT_FLOW_EXECUTABLE: &str = "git-flow";

/// Shells report death by signal N as exit status 128 + N
#[cfg(unix)]
const SIGNAL_EXIT_BASE: i32 = 128;

/// What an external command reported back
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandOutput {
    /// Exit code of the process
    pub code: i32,
    /// Captured stdout (empty when stdio is inherited)
    pub stdout: String,
    /// Captured stderr (empty when stdio is inherited)
    pub stderr: String,
}

impl CommandOutput {
    /// True when the process exited with status 0
    pub fn success(&self) -> bool {
        self.code == 0
    }
}

/// The single boundary through which external processes are started
///
/// `argv[0]` is the program, the rest are its arguments. A non-zero exit is
/// not an error at this level; callers decide what a failure means.
pub trait CommandRunner {
    /// Run `argv` to completion and report its exit code and output
    fn run(&self, argv: &[String]) -> Result<CommandOutput>;
}

/// Runs commands with `std::process::Command`
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner {
    interactive: bool,
}

impl SystemRunner {
    /// Runner capturing stdout and stderr
    pub fn captured() -> Self {
        SystemRunner { interactive: false }
    }

    /// Runner sharing the terminal with the child, so git-flow can open an
    /// editor for tag and merge messages
    pub fn interactive() -> Self {
        SystemRunner { interactive: true }
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, argv: &[String]) -> Result<CommandOutput> {
        let (program, args) = match argv.split_first() {
            Some(split) => split,
            None => return Ok(CommandOutput::default()),
        };

        log::debug!("running: {}", argv.join(" "));
        let mut cmd = Command::new(program);
        cmd.args(args);

        let result = if self.interactive {
            let status = cmd
                .stdin(Stdio::inherit())
                .stdout(Stdio::inherit())
                .stderr(Stdio::inherit())
                .status()?;
            CommandOutput {
                code: exit_status_code(status),
                ..CommandOutput::default()
            }
        } else {
            let output = cmd.output()?;
            CommandOutput {
                code: exit_status_code(output.status),
                stdout: String::from_utf8_lossy(&output.stdout).to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            }
        };

        log::debug!("{} exited with {}", program, result.code);
        Ok(result)
    }
}

/// Prints commands instead of running them
#[derive(Debug, Clone, Copy, Default)]
pub struct DryRunRunner;

impl CommandRunner for DryRunRunner {
    fn run(&self, argv: &[String]) -> Result<CommandOutput> {
        ui::display_dry_run_command(argv);
        Ok(CommandOutput::default())
    }
}

/// Records every command and answers with canned exit codes
///
/// Commands succeed unless a registered failure matches one of their
/// arguments.
#[derive(Debug, Default)]
pub struct RecordingRunner {
    calls: RefCell<Vec<Vec<String>>>,
    failures: Vec<(String, CommandOutput)>,
}

impl RecordingRunner {
    /// Create a runner where every command succeeds
    pub fn new() -> Self {
        Self::default()
    }

    /// Make any command containing the argument `arg` exit with `code`
    pub fn fail_on(mut self, arg: impl Into<String>, code: i32, stderr: impl Into<String>) -> Self {
        self.failures.push((
            arg.into(),
            CommandOutput {
                code,
                stdout: String::new(),
                stderr: stderr.into(),
            },
        ));
        self
    }

    /// All commands run so far, in order
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.borrow().clone()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, argv: &[String]) -> Result<CommandOutput> {
        self.calls.borrow_mut().push(argv.to_vec());

        let failure = self
            .failures
            .iter()
            .find(|(arg, _)| argv.iter().any(|a| a == arg));

        Ok(match failure {
            Some((_, output)) => output.clone(),
            None => CommandOutput::default(),
        })
    }
}

/// Exit code of a finished process; a signal-terminated one maps to 128 + signal
pub fn exit_status_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return SIGNAL_EXIT_BASE + signal;
        }
    }

    EXIT_INTERNAL
}

/// True when an executable `git-flow` is on the current `PATH`
pub fn git_flow_available() -> bool {
    match which::which(GIT_FLOW_EXECUTABLE) {
        Ok(path) => {
            log::debug!("found git-flow at {}", path.display());
            true
        }
        Err(e) => {
            log::debug!("git-flow lookup failed: {}", e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn argv(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_recording_runner_records_in_order() {
        let runner = RecordingRunner::new();
        runner.run(&argv(&["git", "flow", "release", "start", "1.0.0"])).unwrap();
        runner.run(&argv(&["git", "flow", "release", "finish", "1.0.0"])).unwrap();

        let calls = runner.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0][3], "start");
        assert_eq!(calls[1][3], "finish");
    }

    #[test]
    fn test_recording_runner_failure() {
        let runner = RecordingRunner::new().fail_on("finish", 1, "merge conflict");
        let ok = runner.run(&argv(&["git", "flow", "release", "start"])).unwrap();
        let failed = runner.run(&argv(&["git", "flow", "release", "finish"])).unwrap();

        assert!(ok.success());
        assert!(!failed.success());
        assert_eq!(failed.code, 1);
        assert_eq!(failed.stderr, "merge conflict");
    }

    #[test]
    fn test_system_runner_empty_argv() {
        let output = SystemRunner::captured().run(&[]).unwrap();
        assert!(output.success());
    }

    #[test]
    fn test_system_runner_missing_program() {
        let result = SystemRunner::captured().run(&argv(&["definitely-not-a-real-program-xyz"]));
        assert!(result.is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_exit_status_code_normal_exit() {
        use std::os::unix::process::ExitStatusExt;
        assert_eq!(exit_status_code(ExitStatus::from_raw(0)), 0);
        assert_eq!(exit_status_code(ExitStatus::from_raw(3 << 8)), 3);
    }

    #[cfg(unix)]
    #[test]
    fn test_exit_status_code_signal() {
        use std::os::unix::process::ExitStatusExt;
        // SIGKILL
        assert_eq!(exit_status_code(ExitStatus::from_raw(9)), 137);
        // SIGINT
        assert_eq!(exit_status_code(ExitStatus::from_raw(2)), 130);
    }

    #[cfg(unix)]
    #[test]
    fn test_system_runner_reports_signal() {
        let output = SystemRunner::captured()
            .run(&argv(&["sh", "-c", "kill -TERM $$"]))
            .unwrap();
        assert_eq!(output.code, 143);
    }

    #[cfg(unix)]
    #[test]
    fn test_git_flow_lookup_requires_executable_bit() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join(GIT_FLOW_EXECUTABLE);
        fs::write(&script, "#!/bin/sh\n").unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o644)).unwrap();

        let lookup = || which::which_in(GIT_FLOW_EXECUTABLE, Some(dir.path()), dir.path());
        assert!(lookup().is_err());

        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
        assert_eq!(lookup().unwrap(), script);
    }

    #[test]
    fn test_git_flow_lookup_ignores_directories() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join(GIT_FLOW_EXECUTABLE)).unwrap();
        assert!(which::which_in(GIT_FLOW_EXECUTABLE, Some(dir.path()), dir.path()).is_err());
    }
}
