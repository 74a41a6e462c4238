use crate::analyzer::{ResolvedVersion, VersionResolver};
use crate::config::Config;
use crate::domain::SemVer;
use crate::error::{EasyReleaseError, Result};
use crate::flow::{CommandRunner, ReleaseAction, ReleaseCommand};
use crate::git::Repository;
use crate::ui;

/// Arguments a subcommand was invoked with, independent of clap
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Invocation {
    /// Version argument: semver, bump-alias key, or literal
    pub version: Option<String>,
    /// Branch to start the release from
    pub base: Option<String>,
    /// Extra options forwarded to every release command
    pub options: Vec<String>,
}

/// A CLI verb and the `git flow release` commands it expands to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subcommand {
    pub name: &'static str,
    pub release_actions: &'static [ReleaseAction],
    pub has_version: bool,
    pub version_optional: bool,
    pub has_base: bool,
}

pub const INIT: Subcommand = Subcommand {
    name: "init",
    release_actions: &[ReleaseAction::Start, ReleaseAction::Finish],
    has_version: false,
    version_optional: true,
    has_base: true,
};

pub const QUICK: Subcommand = Subcommand {
    name: "quick",
    release_actions: &[ReleaseAction::Start, ReleaseAction::Finish],
    has_version: true,
    version_optional: false,
    has_base: true,
};

pub const START: Subcommand = Subcommand {
    name: "start",
    release_actions: &[ReleaseAction::Start],
    has_version: true,
    version_optional: false,
    has_base: true,
};

pub const FINISH: Subcommand = Subcommand {
    name: "finish",
    release_actions: &[ReleaseAction::Finish],
    has_version: true,
    version_optional: true,
    has_base: false,
};

pub const PUBLISH: Subcommand = Subcommand {
    name: "publish",
    release_actions: &[ReleaseAction::Publish],
    has_version: true,
    version_optional: true,
    has_base: false,
};

pub const DELETE: Subcommand = Subcommand {
    name: "delete",
    release_actions: &[ReleaseAction::Delete],
    has_version: true,
    version_optional: true,
    has_base: false,
};

/// Every subcommand, in help order
pub const SUBCOMMANDS: &[Subcommand] = &[INIT, QUICK, START, FINISH, PUBLISH, DELETE];

impl Subcommand {
    /// Resolve the version, validate the base branch, then run each release
    /// command in order, stopping at the first failure.
    ///
    /// Nothing is run when the version or base cannot be resolved.
    pub fn execute<R, C>(
        &self,
        invocation: &Invocation,
        config: &Config,
        repo: &R,
        runner: &C,
    ) -> Result<ResolvedVersion>
    where
        R: Repository + ?Sized,
        C: CommandRunner + ?Sized,
    {
        let base = if self.has_base {
            invocation.base.as_deref()
        } else {
            None
        };
        if let Some(base) = base {
            if !repo.branches()?.iter().any(|b| b == base) {
                return Err(EasyReleaseError::InvalidBase {
                    base: base.to_string(),
                });
            }
        }

        let version = if self.has_version {
            if !self.version_optional && invocation.version.is_none() {
                return Err(EasyReleaseError::version(format!(
                    "'{}' requires a version argument",
                    self.name
                )));
            }
            let resolver = VersionResolver::new(repo, config.release.prefix.clone());
            resolver.process_version(invocation.version.as_deref())?
        } else {
            ResolvedVersion::Semantic(SemVer::default())
        };
        log::info!("{}: resolved version {}", self.name, version);

        let mut options = invocation.options.clone();
        options.extend(config.release.default_options.iter().cloned());

        for action in self.release_actions {
            let command = ReleaseCommand {
                action: *action,
                version: &version,
                base,
                options: &options,
            };
            ui::display_status(&format!("git flow release {} {}", action.as_str(), version));
            command.execute(runner)?;
        }

        Ok(version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flow::RecordingRunner;
    use crate::git::MockRepository;

    fn find(name: &str) -> Option<&'static Subcommand> {
        SUBCOMMANDS.iter().find(|sub| sub.name == name)
    }

    fn invocation(version: Option<&str>, base: Option<&str>) -> Invocation {
        Invocation {
            version: version.map(str::to_string),
            base: base.map(str::to_string),
            options: Vec::new(),
        }
    }

    #[test]
    fn test_table_matches_cli_verbs() {
        let names: Vec<&str> = SUBCOMMANDS.iter().map(|s| s.name).collect();
        assert_eq!(
            names,
            vec!["init", "quick", "start", "finish", "publish", "delete"]
        );
        assert!(find("quick").is_some());
        assert!(find("bogus").is_none());
    }

    #[test]
    fn test_init_starts_and_finishes_zero() {
        let repo = MockRepository::new();
        let runner = RecordingRunner::new();
        let sub = find("init").unwrap();

        let version = sub
            .execute(
                &invocation(None, Some("master")),
                &Config::default(),
                &repo,
                &runner,
            )
            .unwrap();

        assert_eq!(version.to_string(), "0.0.0");
        assert_eq!(
            runner.calls(),
            vec![
                vec!["git", "flow", "release", "start", "0.0.0", "master"],
                vec!["git", "flow", "release", "finish", "0.0.0", "master"],
            ]
        );
    }

    #[test]
    fn test_quick_bumps_latest_tag() {
        let repo = MockRepository::new().with_tags(["v0.9.1", "v0.10.0"]);
        let runner = RecordingRunner::new();

        find("quick")
            .unwrap()
            .execute(&invocation(Some("minor"), None), &Config::default(), &repo, &runner)
            .unwrap();

        let calls = runner.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0][4], "0.11.0");
        assert_eq!(calls[1][4], "0.11.0");
    }

    #[test]
    fn test_finish_uses_active_release_branch() {
        let repo = MockRepository::new().with_active_branch("release/2.3.4");
        let runner = RecordingRunner::new();

        find("finish")
            .unwrap()
            .execute(&invocation(None, None), &Config::default(), &repo, &runner)
            .unwrap();

        assert_eq!(
            runner.calls(),
            vec![vec!["git", "flow", "release", "finish", "2.3.4"]]
        );
    }

    #[test]
    fn test_finish_ignores_base() {
        let repo = MockRepository::new();
        let runner = RecordingRunner::new();

        find("finish")
            .unwrap()
            .execute(
                &invocation(Some("1.0.0"), Some("nonexistent")),
                &Config::default(),
                &repo,
                &runner,
            )
            .unwrap();

        assert_eq!(runner.calls()[0].len(), 5);
    }

    #[test]
    fn test_unresolvable_version_runs_nothing() {
        let repo = MockRepository::new();
        let runner = RecordingRunner::new();

        let err = find("publish")
            .unwrap()
            .execute(&invocation(None, None), &Config::default(), &repo, &runner)
            .unwrap_err();

        assert!(matches!(err, EasyReleaseError::VersionUnavailable));
        assert!(runner.calls().is_empty());
    }

    #[test]
    fn test_required_version_missing() {
        let repo = MockRepository::new().with_active_branch("release/1.0.0");
        let runner = RecordingRunner::new();

        let err = find("start")
            .unwrap()
            .execute(&invocation(None, None), &Config::default(), &repo, &runner)
            .unwrap_err();

        assert!(err.to_string().contains("requires a version"));
        assert!(runner.calls().is_empty());
    }

    #[test]
    fn test_invalid_base_runs_nothing() {
        let repo = MockRepository::new();
        let runner = RecordingRunner::new();

        let err = find("start")
            .unwrap()
            .execute(
                &invocation(Some("1.0.0"), Some("no-such-branch")),
                &Config::default(),
                &repo,
                &runner,
            )
            .unwrap_err();

        assert!(matches!(err, EasyReleaseError::InvalidBase { .. }));
        assert!(runner.calls().is_empty());
    }

    #[test]
    fn test_failure_stops_remaining_commands() {
        let repo = MockRepository::new();
        let runner = RecordingRunner::new().fail_on("start", 1, "already exists");

        let err = find("quick")
            .unwrap()
            .execute(&invocation(Some("1.0.0"), None), &Config::default(), &repo, &runner)
            .unwrap_err();

        assert_eq!(err.exit_code(), 1);
        assert_eq!(runner.calls().len(), 1);
    }

    #[test]
    fn test_config_default_options_follow_cli_options() {
        let repo = MockRepository::new();
        let runner = RecordingRunner::new();
        let mut config = Config::default();
        config.release.default_options = vec!["-F".to_string()];
        let inv = Invocation {
            version: Some("1.0.0".to_string()),
            base: Some("develop".to_string()),
            options: vec!["--showcommands".to_string()],
        };

        find("start")
            .unwrap()
            .execute(&inv, &config, &repo, &runner)
            .unwrap();

        assert_eq!(
            runner.calls(),
            vec![vec![
                "git",
                "flow",
                "release",
                "start",
                "1.0.0",
                "develop",
                "--showcommands",
                "-F"
            ]]
        );
    }
}
