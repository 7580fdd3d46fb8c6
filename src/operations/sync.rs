// Sync Helper
// Interactive, confirmed stage -> commit -> push over a version-control backend

use std::ffi::OsString;
use std::io::{self, BufRead, Write};
use thiserror::Error;
use tracing::debug;

use super::git::{VcsError, VcsOps, VcsStep};
use crate::constants::{
    ABORT_MESSAGE, COMMIT_MESSAGE_PROMPT, CONFIRM_ACCEPT, CONFIRM_PROMPT, EXIT_DECLINED,
    STATUS_SEPARATOR, SUCCESS_MESSAGE,
};

/// How a sync run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Operator did not confirm; nothing was staged, committed or pushed
    Declined,
    /// Stage, commit and push all succeeded
    Succeeded,
    /// A git step reported failure; later steps were not attempted
    Failed { step: VcsStep, code: Option<i32> },
}

impl SyncOutcome {
    /// Process exit code for this outcome
    pub fn exit_code(&self) -> i32 {
        match self {
            SyncOutcome::Succeeded => 0,
            SyncOutcome::Declined => EXIT_DECLINED,
            SyncOutcome::Failed { code, .. } => code.unwrap_or(1),
        }
    }
}

/// Errors that stop a sync run before any outcome is reached
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("failed to read operator input")]
    Input(#[source] io::Error),

    #[error("failed to write to the terminal")]
    Output(#[source] io::Error),

    #[error(transparent)]
    Vcs(#[from] VcsError),
}

impl SyncError {
    /// Process exit code, mirroring a shell's 127 for a missing executable
    pub fn exit_code(&self) -> i32 {
        match self {
            SyncError::Vcs(VcsError::Launch { source, .. })
                if source.kind() == io::ErrorKind::NotFound =>
            {
                127
            }
            SyncError::Vcs(VcsError::Failed { code, .. }) => code.unwrap_or(1),
            _ => 1,
        }
    }
}

/// Guarded front end over stage, commit and push
pub struct SyncHelper<V> {
    vcs: V,
}

impl<V: VcsOps> SyncHelper<V> {
    pub fn new(vcs: V) -> Self {
        Self { vcs }
    }

    /// Backend the helper drives
    pub fn vcs(&self) -> &V {
        &self.vcs
    }

    /// Run the prompt / review / confirm / commit flow once.
    ///
    /// A failing git step ends the run with [`SyncOutcome::Failed`]; earlier steps
    /// are left in place.
    pub fn run<R: BufRead, W: Write>(
        &self,
        input: &mut R,
        output: &mut W,
    ) -> Result<SyncOutcome, SyncError> {
        let message = message_from_bytes(prompt(input, output, COMMIT_MESSAGE_PROMPT)?)?;
        debug!(len = message.len(), "commit message captured");

        writeln!(output, "{}", STATUS_SEPARATOR).map_err(SyncError::Output)?;
        output.flush().map_err(SyncError::Output)?;

        let status = match self.vcs.status() {
            Ok(status) => status,
            Err(e) => return settle(e),
        };

        output.write_all(&status).map_err(SyncError::Output)?;
        writeln!(output, "{}", STATUS_SEPARATOR).map_err(SyncError::Output)?;

        let answer = prompt(input, output, CONFIRM_PROMPT)?;
        if answer != CONFIRM_ACCEPT.as_bytes() {
            writeln!(output, "{}", ABORT_MESSAGE).map_err(SyncError::Output)?;
            output.flush().map_err(SyncError::Output)?;
            debug!("operator declined");
            return Ok(SyncOutcome::Declined);
        }

        let result = self
            .vcs
            .stage_all()
            .and_then(|()| self.vcs.commit(&message))
            .and_then(|()| self.vcs.push());

        if let Err(e) = result {
            return settle(e);
        }

        writeln!(output, "{}", SUCCESS_MESSAGE).map_err(SyncError::Output)?;
        output.flush().map_err(SyncError::Output)?;
        Ok(SyncOutcome::Succeeded)
    }
}

/// Turn a step failure into an outcome; launch failures stay errors
fn settle(error: VcsError) -> Result<SyncOutcome, SyncError> {
    match error {
        VcsError::Failed { step, code } => {
            debug!(%step, ?code, "git step failed");
            Ok(SyncOutcome::Failed { step, code })
        }
        launch => Err(launch.into()),
    }
}

/// Print `text` and read one raw line. End of input reads as an empty line.
fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, text: &str) -> Result<Vec<u8>, SyncError> {
    output.write_all(text.as_bytes()).map_err(SyncError::Output)?;
    output.flush().map_err(SyncError::Output)?;

    let mut line = Vec::new();
    input.read_until(b'\n', &mut line).map_err(SyncError::Input)?;

    if line.ends_with(b"\n") {
        line.pop();
        if line.ends_with(b"\r") {
            line.pop();
        }
    }

    Ok(line)
}

#[cfg(unix)]
fn message_from_bytes(bytes: Vec<u8>) -> Result<OsString, SyncError> {
    use std::os::unix::ffi::OsStringExt;
    Ok(OsString::from_vec(bytes))
}

#[cfg(not(unix))]
fn message_from_bytes(bytes: Vec<u8>) -> Result<OsString, SyncError> {
    String::from_utf8(bytes)
        .map(OsString::from)
        .map_err(|e| SyncError::Input(io::Error::new(io::ErrorKind::InvalidData, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::ffi::OsStr;
    use std::io::Cursor;

    /// Records every call and fails the configured step
    #[derive(Default)]
    struct FakeVcs {
        calls: RefCell<Vec<String>>,
        messages: RefCell<Vec<OsString>>,
        status_output: Vec<u8>,
        fail_at: Option<(VcsStep, i32)>,
        missing_git: bool,
    }

    impl FakeVcs {
        fn with_status(text: &str) -> Self {
            Self {
                status_output: text.as_bytes().to_vec(),
                ..Self::default()
            }
        }

        fn failing(mut self, step: VcsStep, code: i32) -> Self {
            self.fail_at = Some((step, code));
            self
        }

        fn outcome(&self, step: VcsStep) -> Result<(), VcsError> {
            if self.missing_git {
                return Err(VcsError::Launch {
                    step,
                    source: io::Error::new(io::ErrorKind::NotFound, "git not found"),
                });
            }
            match self.fail_at {
                Some((failing, code)) if failing == step => Err(VcsError::Failed { step, code: Some(code) }),
                _ => Ok(()),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }
    }

    impl VcsOps for FakeVcs {
        fn status(&self) -> Result<Vec<u8>, VcsError> {
            self.calls.borrow_mut().push("status".to_string());
            self.outcome(VcsStep::Status)?;
            Ok(self.status_output.clone())
        }

        fn stage_all(&self) -> Result<(), VcsError> {
            self.calls.borrow_mut().push("stage".to_string());
            self.outcome(VcsStep::Stage)
        }

        fn commit(&self, message: &OsStr) -> Result<(), VcsError> {
            self.calls.borrow_mut().push(format!("commit:{}", message.to_string_lossy()));
            self.messages.borrow_mut().push(message.to_owned());
            self.outcome(VcsStep::Commit)
        }

        fn push(&self) -> Result<(), VcsError> {
            self.calls.borrow_mut().push("push".to_string());
            self.outcome(VcsStep::Push)
        }
    }

    fn run(vcs: FakeVcs, input: &str) -> (Result<SyncOutcome, SyncError>, String, Vec<String>) {
        let helper = SyncHelper::new(vcs);
        let mut reader = Cursor::new(input.as_bytes().to_vec());
        let mut output = Vec::new();
        let result = helper.run(&mut reader, &mut output);
        let calls = helper.vcs().calls();
        (result, String::from_utf8(output).unwrap(), calls)
    }

    #[test]
    fn test_decline_makes_no_changes() {
        let (result, output, calls) = run(FakeVcs::with_status("M a.txt\n"), "fix typo\nn\n");

        let outcome = result.unwrap();
        assert_eq!(outcome, SyncOutcome::Declined);
        assert_eq!(outcome.exit_code(), 1);
        assert_eq!(calls, vec!["status"]);
        assert!(output.ends_with("Commit aborted.\n"));
    }

    #[test]
    fn test_only_exact_lowercase_y_confirms() {
        for answer in ["Y", "yes", "", " y", "y ", "n", "yy"] {
            let input = format!("msg\n{}\n", answer);
            let (result, _, calls) = run(FakeVcs::default(), &input);
            assert_eq!(result.unwrap(), SyncOutcome::Declined, "answer {:?}", answer);
            assert_eq!(calls, vec!["status"], "answer {:?}", answer);
        }
    }

    #[test]
    fn test_end_of_input_declines() {
        let (result, _, calls) = run(FakeVcs::default(), "msg\n");
        assert_eq!(result.unwrap(), SyncOutcome::Declined);
        assert_eq!(calls, vec!["status"]);
    }

    #[test]
    fn test_accept_runs_stage_commit_push_in_order() {
        let (result, output, calls) = run(FakeVcs::with_status("?? photo.jpg\n"), "add assets\ny\n");

        let outcome = result.unwrap();
        assert_eq!(outcome, SyncOutcome::Succeeded);
        assert_eq!(outcome.exit_code(), 0);
        assert_eq!(calls, vec!["status", "stage", "commit:add assets", "push"]);
        assert!(output.ends_with(&format!("{}\n", SUCCESS_MESSAGE)));
    }

    #[test]
    fn test_commit_message_is_passed_through_verbatim() {
        let (_, _, calls) = run(FakeVcs::default(), "  spaced  out\t\ny\n");
        assert_eq!(calls[2], "commit:  spaced  out\t");

        let (_, _, calls) = run(FakeVcs::default(), "\ny\n");
        assert_eq!(calls[2], "commit:");

        let (_, _, calls) = run(FakeVcs::default(), "windows line\r\ny\r\n");
        assert_eq!(calls[2], "commit:windows line");
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_message_reaches_git_byte_for_byte() {
        use std::os::unix::ffi::OsStrExt;

        let helper = SyncHelper::new(FakeVcs::default());
        let mut reader = Cursor::new(b"caf\xe9 photos\ny\n".to_vec());
        let mut output = Vec::new();

        let outcome = helper.run(&mut reader, &mut output).unwrap();

        assert_eq!(outcome, SyncOutcome::Succeeded);
        let messages = helper.vcs().messages.borrow();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].as_bytes(), b"caf\xe9 photos");
    }

    #[test]
    fn test_status_shown_between_separators() {
        let status = "On branch main\n  weird   spacing\n\n\tChanges\n";
        let (_, output, _) = run(FakeVcs::with_status(status), "msg\nn\n");

        let expected = format!(
            "{}{}\n{}{}\n{}{}\n",
            COMMIT_MESSAGE_PROMPT, STATUS_SEPARATOR, status, STATUS_SEPARATOR, CONFIRM_PROMPT, ABORT_MESSAGE
        );
        assert_eq!(output, expected);
    }

    #[test]
    fn test_commit_failure_skips_push() {
        let vcs = FakeVcs::default().failing(VcsStep::Commit, 1);
        let (result, output, calls) = run(vcs, "release v2\ny\n");

        let outcome = result.unwrap();
        assert_eq!(outcome, SyncOutcome::Failed { step: VcsStep::Commit, code: Some(1) });
        assert_eq!(outcome.exit_code(), 1);
        assert_eq!(calls, vec!["status", "stage", "commit:release v2"]);
        assert!(!output.contains(SUCCESS_MESSAGE));
    }

    #[test]
    fn test_push_failure_reports_tool_exit_code() {
        let vcs = FakeVcs::default().failing(VcsStep::Push, 128);
        let (result, _, calls) = run(vcs, "add assets\ny\n");

        let outcome = result.unwrap();
        assert_eq!(outcome, SyncOutcome::Failed { step: VcsStep::Push, code: Some(128) });
        assert_eq!(outcome.exit_code(), 128);
        assert_eq!(calls.len(), 4);
    }

    #[test]
    fn test_stage_failure_stops_the_flow() {
        let vcs = FakeVcs::default().failing(VcsStep::Stage, 2);
        let (result, _, calls) = run(vcs, "msg\ny\n");
        assert_eq!(result.unwrap().exit_code(), 2);
        assert_eq!(calls, vec!["status", "stage"]);
    }

    #[test]
    fn test_status_failure_ends_before_confirmation() {
        let vcs = FakeVcs::default().failing(VcsStep::Status, 128);
        let (result, output, calls) = run(vcs, "msg\ny\n");

        assert_eq!(result.unwrap(), SyncOutcome::Failed { step: VcsStep::Status, code: Some(128) });
        assert_eq!(calls, vec!["status"]);
        assert!(!output.contains(CONFIRM_PROMPT));
    }

    #[test]
    fn test_missing_git_is_an_error() {
        let vcs = FakeVcs { missing_git: true, ..FakeVcs::default() };
        let (result, _, _) = run(vcs, "msg\ny\n");

        let err = result.unwrap_err();
        assert_eq!(err.exit_code(), 127);
    }
}
