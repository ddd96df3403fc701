pub mod memory;

pub use memory::InMemoryRepository;
pub use tinyurl_core::repository::{ReadRepository, Repository};
pub use tinyurl_core::StorageError;
