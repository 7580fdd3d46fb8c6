// Operations module
// Git sync flow, image discovery and motion planning

pub mod git;
pub mod library;
pub mod motion;
pub mod sync;

pub use git::{GitCli, VcsError, VcsOps, VcsStep};
pub use library::ImageLibrary;
pub use motion::{MotionFrame, MotionPlan};
pub use sync::{SyncError, SyncHelper, SyncOutcome};
