//! Model identifier cache for the gembridge translation layer.
//!
//! The gateway feeds every upstream model-listing response into a
//! [`ModelRegistry`]; request handling then resolves client-supplied model
//! names against it case-insensitively.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod registry;

pub use registry::{ModelRegistry, normalize_model_id};
