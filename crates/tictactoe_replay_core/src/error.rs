//! History navigation errors.

use derive_more::{Display, Error};
use tracing::instrument;

/// A jump targeted a snapshot that does not exist.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display(
    "History error: move #{} out of range ({} snapshots) at {}:{}",
    index,
    len,
    file,
    line
)]
pub struct HistoryError {
    /// Requested history index.
    pub index: usize,
    /// History length at the time of the request.
    pub len: usize,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl HistoryError {
    /// Creates a new out-of-range error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn out_of_range(index: usize, len: usize) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            index,
            len,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
