pub mod atomic_writer;
pub mod board_file_store;

pub use atomic_writer::AtomicWriter;
pub use board_file_store::{BoardDocument, BoardFileStore, FORMAT_VERSION};
