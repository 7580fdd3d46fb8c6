// Sync Helper
// Prompt for a message, review `git status`, then add, commit and push on confirmation

use std::io;
use std::process;

use pi_photo_viewer::operations::{GitCli, SyncHelper};
use pi_photo_viewer::utilities::{init_logging, resolve_working_dir};
use tracing::debug;

fn main() {
    init_logging();

    let repo_path = match resolve_working_dir() {
        Ok(path) => path,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    };

    let git = GitCli::new(repo_path);
    if !GitCli::is_repo(git.repo_path()) {
        debug!(dir = %git.repo_path().display(), "no .git directory here; git will search parent directories");
    }

    let helper = SyncHelper::new(git);
    let stdin = io::stdin();
    let stdout = io::stdout();

    let code = match helper.run(&mut stdin.lock(), &mut stdout.lock()) {
        Ok(outcome) => outcome.exit_code(),
        Err(e) => {
            let code = e.exit_code();
            eprintln!("Error: {:#}", anyhow::Error::new(e));
            code
        }
    };

    process::exit(code);
}
