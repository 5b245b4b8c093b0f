//! Concrete adapters for the storage port.

pub mod file_storage;
pub mod memory_storage;

pub use self::file_storage::FileStorage;
pub use self::memory_storage::MemoryStorage;
