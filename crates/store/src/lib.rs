pub(crate) mod backend;
pub(crate) mod errors;
pub(crate) mod file;
pub(crate) mod memory;
pub(crate) mod store;

pub use backend::StorageBackend;
pub use errors::StoreError;
pub use file::FileBackend;
pub use memory::MemoryBackend;
pub use store::{RecordStore, RECORD_KEY};
