//! Common types shared by all catalog records

pub mod client_key;
pub mod collection;
pub mod entity_id;

// Re-exports
pub use client_key::{new_id, ClientKey};
pub use collection::Keyed;
pub use entity_id::{EntityId, InvalidId};
