//! Core contracts for stubseed.
//!
//! This crate defines the column descriptors, value/record types, the error
//! taxonomy, and the boundary traits implemented by database adapters.

pub mod column;
pub mod error;
pub mod inflect;
pub mod provider;
pub mod record;

pub use column::{ColumnDescriptor, IntWidth, SqlType};
pub use error::{Error, Result};
pub use provider::{RowStore, SchemaMetadataProvider};
pub use record::{FieldValue, SynthesizedRecord};
