//! Common types and traits shared by all entity records

pub mod entity_id;

pub use entity_id::EntityId;
