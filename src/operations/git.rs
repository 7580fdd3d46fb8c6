// Git Operations
// Version-control capability used by the sync helper, with a git CLI backend

use std::ffi::OsStr;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};
use thiserror::Error;
use tracing::debug;

/// One external version-control invocation made by the sync flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VcsStep {
    Status,
    Stage,
    Commit,
    Push,
}

impl fmt::Display for VcsStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VcsStep::Status => "status",
            VcsStep::Stage => "add",
            VcsStep::Commit => "commit",
            VcsStep::Push => "push",
        };
        f.write_str(name)
    }
}

/// Failure of a version-control step
#[derive(Debug, Error)]
pub enum VcsError {
    /// The tool ran and reported failure. `code` is `None` when it was killed by a signal.
    #[error("git {step} failed ({})", exit_description(.code))]
    Failed { step: VcsStep, code: Option<i32> },

    /// The tool could not be started at all
    #[error("failed to run git {step}: {source}")]
    Launch {
        step: VcsStep,
        #[source]
        source: io::Error,
    },
}

fn exit_description(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "terminated by signal".to_string(),
    }
}

/// Version-control operations the sync flow depends on
pub trait VcsOps {
    /// Raw output of the working-tree status query
    fn status(&self) -> Result<Vec<u8>, VcsError>;

    /// Stage every addition, modification and deletion, including untracked files
    fn stage_all(&self) -> Result<(), VcsError>;

    /// Record the staged changes with `message`, passed through unmodified
    fn commit(&self, message: &OsStr) -> Result<(), VcsError>;

    /// Push to the configured upstream of the current branch
    fn push(&self) -> Result<(), VcsError>;
}

/// `VcsOps` backed by the `git` executable, scoped to one repository directory.
///
/// Mutating steps inherit the terminal so the operator sees git's own output and
/// can answer credential prompts.
#[derive(Debug, Clone)]
pub struct GitCli {
    repo_path: PathBuf,
}

impl GitCli {
    /// Bind git invocations to `repo_path`
    pub fn new(repo_path: impl Into<PathBuf>) -> Self {
        Self {
            repo_path: repo_path.into(),
        }
    }

    /// Directory every invocation runs in
    pub fn repo_path(&self) -> &Path {
        &self.repo_path
    }

    /// Check if a path is a git repository
    pub fn is_repo(path: &Path) -> bool {
        path.join(".git").exists()
    }

    fn git<S: AsRef<OsStr>>(&self, args: &[S]) -> Command {
        let mut command = Command::new("git");
        command.args(args).current_dir(&self.repo_path);
        command
    }

    fn run<S: AsRef<OsStr>>(&self, step: VcsStep, args: &[S]) -> Result<(), VcsError> {
        debug!(%step, repo = %self.repo_path.display(), "running git");

        let status = self
            .git(args)
            .status()
            .map_err(|source| VcsError::Launch { step, source })?;

        check(step, status)
    }
}

fn check(step: VcsStep, status: ExitStatus) -> Result<(), VcsError> {
    if status.success() {
        Ok(())
    } else {
        Err(VcsError::Failed {
            step,
            code: status.code(),
        })
    }
}

impl VcsOps for GitCli {
    fn status(&self) -> Result<Vec<u8>, VcsError> {
        let step = VcsStep::Status;
        debug!(%step, repo = %self.repo_path.display(), "running git");

        let output = self
            .git(&["status"])
            .stdin(Stdio::inherit())
            .stderr(Stdio::inherit())
            .output()
            .map_err(|source| VcsError::Launch { step, source })?;

        check(step, output.status)?;
        Ok(output.stdout)
    }

    fn stage_all(&self) -> Result<(), VcsError> {
        self.run(VcsStep::Stage, &["add", "-A"])
    }

    fn commit(&self, message: &OsStr) -> Result<(), VcsError> {
        self.run(VcsStep::Commit, &[OsStr::new("commit"), OsStr::new("-m"), message])
    }

    fn push(&self) -> Result<(), VcsError> {
        self.run(VcsStep::Push, &["push"])
    }
}
