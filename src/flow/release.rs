use crate::analyzer::ResolvedVersion;
use crate::error::{EasyReleaseError, Result};
use crate::flow::CommandRunner;

/// The `git flow release` subcommands git-easyrelease drives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseAction {
    Start,
    Finish,
    Publish,
    Delete,
}

impl ReleaseAction {
    /// Name of the action as git-flow spells it
    pub fn as_str(&self) -> &'static str {
        match self {
            ReleaseAction::Start => "start",
            ReleaseAction::Finish => "finish",
            ReleaseAction::Publish => "publish",
            ReleaseAction::Delete => "delete",
        }
    }
}

/// One fully-resolved `git flow release <action> <version> [<base>] [<options>...]`
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseCommand<'a> {
    pub action: ReleaseAction,
    pub version: &'a ResolvedVersion,
    pub base: Option<&'a str>,
    pub options: &'a [String],
}

impl<'a> ReleaseCommand<'a> {
    /// Full argument vector, program first
    pub fn argv(&self) -> Vec<String> {
        let mut argv = vec![
            "git".to_string(),
            "flow".to_string(),
            "release".to_string(),
            self.action.as_str().to_string(),
            self.version.to_string(),
        ];
        if let Some(base) = self.base {
            argv.push(base.to_string());
        }
        argv.extend(self.options.iter().cloned());
        argv
    }

    /// Run the command, turning a non-zero exit into
    /// [`EasyReleaseError::ReleaseCommand`]
    pub fn execute<C: CommandRunner + ?Sized>(&self, runner: &C) -> Result<()> {
        let argv = self.argv();
        let output = runner.run(&argv)?;

        if !output.success() {
            return Err(EasyReleaseError::ReleaseCommand {
                command: argv.join(" "),
                code: output.code,
                stderr: output.stderr.trim().to_string(),
            });
        }

        Ok(())
    }
}
