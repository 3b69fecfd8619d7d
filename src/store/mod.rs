//! 内存存储层
//!
//! Products and orders live in process memory for the process lifetime —
//! there is no persistence across restarts. Each store owns its own
//! [`IdAllocator`] and guards its collection with a `parking_lot::RwLock`,
//! so every mutation is exclusive against every other mutation and against
//! snapshot reads on the same store.

pub mod catalog;
pub mod id;
pub mod orders;

pub use catalog::{CatalogStore, DEFAULT_PRODUCT_IMAGE};
pub use id::IdAllocator;
pub use orders::OrderStore;
