//! List data model: items, collections and input validation

mod error;
mod item;

pub use error::{LoadError, ValidationError};
pub use item::{Item, ItemCollection};
