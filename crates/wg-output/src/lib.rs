//! `wg-output` — writers for flattened graphs.
//!
//! | Backend     | Files created                    |
//! |-------------|----------------------------------|
//! | JSON        | `nodes.json`, `edges.json`       |
//!
//! Backends implement [`OutputWriter`].  Each file holds one top-level JSON
//! array, pretty-printed with 2-space indentation.
//!
//! # Usage
//!
//! ```rust,ignore
//! use wg_output::{JsonWriter, OutputWriter};
//!
//! let mut writer = JsonWriter::from_config(&config);
//! writer.write_flat(&flat)?;
//! ```

pub mod error;
pub mod json;
pub mod writer;


pub use error::{OutputError, OutputResult};
pub use json::JsonWriter;
pub use writer::OutputWriter;
