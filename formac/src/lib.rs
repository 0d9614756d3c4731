pub mod error;
pub mod memory;
pub mod request;

pub use memory::MemoryPlatform;
pub use request::EnrichmentRequest;
