//! # cat-core
//!
//! Streaming line-transformation engine behind the `cat` utility.
//!
//! The crate reads an input in fixed-size chunks, rebuilds line boundaries
//! across chunk boundaries and renders each line according to a set of
//! [`DisplayOptions`]: line numbering, blank-line squeezing, `$` at line
//! ends, and caret/meta notation for tabs and non-printing bytes. Output is
//! written in blocks sized to the destination device.
//!
//! Two pipelines share the same reader/writer boundary:
//!
//! - [`copy`] moves bytes unchanged when no option is active
//! - [`transform`] renders lines and keeps cross-input state in a [`RunState`]
//!
//! ```
//! use cat_core::{transform, BlockSizes, DisplayOptions, RunState};
//!
//! let options = DisplayOptions::default().with_number(true);
//! let mut state = RunState::new();
//! let mut out = Vec::new();
//!
//! transform(&b"a\nb\n"[..], &mut out, &options, &mut state, BlockSizes::default())?;
//! transform(&b"c\n"[..], &mut out, &options, &mut state, BlockSizes::default())?;
//! assert_eq!(out, b"     1\ta\n     2\tb\n     3\tc\n");
//! # Ok::<(), cat_core::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod escape;
pub mod number;
pub mod options;
pub mod pipeline;
pub mod state;

pub use config::{BlockSizes, StreamSummary, MIN_BLOCK_SIZE};
pub use error::{Error, Result};
pub use number::LineNumber;
pub use options::DisplayOptions;
pub use pipeline::{copy, transform};
pub use state::{BlankRun, RunState};
