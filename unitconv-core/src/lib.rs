//! Unitconv Core - Shared error types
//!
//! This crate provides the error taxonomy used throughout Unitconv:
//! - `ConversionError`: every recoverable failure of a conversion request
//! - `ErrorReport`: the serializable form handed to machine consumers

mod error;

pub use error::{codes, ConversionError, ErrorReport};
