//! Storage Adapters
//!
//! Implementations of the HealthStore port.
//!
//! ## Available Adapters
//!
//! - **FileHealthStore** - One JSON file per key, one directory per user
//! - **InMemoryHealthStore** - Shared in-process map (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileHealthStore, InMemoryHealthStore};
//!
//! // Production: file-based storage
//! let store = FileHealthStore::new("./data");
//!
//! // Testing: in-memory storage
//! let store = InMemoryHealthStore::new();
//! ```

mod file_health_store;
mod in_memory_health_store;

pub use file_health_store::FileHealthStore;
pub use in_memory_health_store::InMemoryHealthStore;
