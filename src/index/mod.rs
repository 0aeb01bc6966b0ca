//! Secondary indices over the entity store

pub mod name_index;

pub use name_index::{NameEntry, NameIndex};
