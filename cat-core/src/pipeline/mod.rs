//! Pipelines moving bytes from a source to a sink.

mod sync;

pub use sync::{copy, transform};
