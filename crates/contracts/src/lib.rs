//! Shared types of the service catalog admin: records, the collection
//! editor, payload serialization and form state. Target-independent, so
//! everything here is unit-tested natively.

pub mod domain;
pub mod enums;
pub mod shared;
