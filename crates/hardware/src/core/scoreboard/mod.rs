//! Scoreboard bookkeeping: the in-flight operation queue and the
//! per-register producer table.

pub mod queue;
pub mod status;

pub use queue::{Entry, EntryId, ScoreboardQueue};
pub use status::RegisterStatus;
