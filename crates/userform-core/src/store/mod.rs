//! Submission store and edit cursor.

mod mode;
mod submissions;

pub use mode::FormMode;
pub use submissions::SubmissionStore;
