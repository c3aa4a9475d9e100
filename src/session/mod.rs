//! Per-user session state and the test-taking flow.

pub mod identity;
pub mod progress;
pub mod test_run;

pub use identity::{SessionStore, UserSession};
pub use progress::{ProgressStore, TestProgress, TestResult};
pub use test_run::{TestRun, TestRunError};
