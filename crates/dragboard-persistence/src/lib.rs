pub mod journal;
pub mod store;

pub use journal::{JournalEntry, JournalSink};
pub use store::*;
