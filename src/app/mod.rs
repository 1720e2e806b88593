//! Application facade: state ownership, mutations, summarization orchestration

mod manager;
mod state;
mod summary;

pub use manager::{AppError, NotesManager};
pub use state::AppState;
pub use summary::{SummaryJob, SummaryOutcome, SummaryRejected, SummaryTask};
