mod file_storage;
mod memory_storage;

pub use file_storage::JsonFileStorage;
pub use memory_storage::MemoryStorage;
