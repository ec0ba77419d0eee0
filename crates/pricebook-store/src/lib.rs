pub mod backend;
pub mod error;
pub mod store;

pub use backend::{FsBackend, MemoryBackend, StorageBackend};
pub use error::{Error, Result};
pub use store::ItemStore;
