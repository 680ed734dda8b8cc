//! Shared configuration primitives and types for stream processing.

/// Smallest block size used for reads and writes, whatever the device reports.
pub const MIN_BLOCK_SIZE: usize = 128 * 1024;

/// I/O granularity used by the copy and transform pipelines.
///
/// Both sizes are clamped from below to [`MIN_BLOCK_SIZE`]; a handle that
/// reports a smaller preferred size (or none at all) still gets 128 KiB.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockSizes {
    input: usize,
    output: usize,
}

impl Default for BlockSizes {
    fn default() -> Self {
        Self {
            input: MIN_BLOCK_SIZE,
            output: MIN_BLOCK_SIZE,
        }
    }
}

impl BlockSizes {
    /// Builds block sizes from the native sizes reported for the source and sink.
    ///
    /// # Parameters
    ///
    /// * `input` - Preferred block size of the input handle, if known
    /// * `output` - Preferred block size of the output handle, if known
    pub fn from_native(input: Option<u64>, output: Option<u64>) -> Self {
        Self {
            input: clamp_block_size(input),
            output: clamp_block_size(output),
        }
    }

    /// Overrides both sizes without applying the 128 KiB floor.
    ///
    /// Intended for tests that need tiny blocks to exercise the flushing logic.
    /// Zero is bumped to one.
    #[must_use]
    pub fn exact(input: usize, output: usize) -> Self {
        Self {
            input: input.max(1),
            output: output.max(1),
        }
    }

    /// Block size preferred by the input handle.
    pub const fn input(&self) -> usize {
        self.input
    }

    /// Block size used when flushing to the output handle.
    pub const fn output(&self) -> usize {
        self.output
    }

    /// Capacity of the reusable read buffer: the larger of the two sizes.
    pub fn read_capacity(&self) -> usize {
        self.input.max(self.output)
    }
}

fn clamp_block_size(native: Option<u64>) -> usize {
    native
        .and_then(|size| usize::try_from(size).ok())
        .map_or(MIN_BLOCK_SIZE, |size| size.max(MIN_BLOCK_SIZE))
}

/// Statistical summary of one completed pipeline run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamSummary {
    /// Total number of bytes read from the input source.
    pub bytes_read: u64,

    /// Total number of bytes written to the output destination.
    pub bytes_written: u64,
}

impl StreamSummary {
    /// Creates a new stream summary with the specified byte counts.
    pub(crate) const fn new(bytes_read: u64, bytes_written: u64) -> Self {
        Self {
            bytes_read,
            bytes_written,
        }
    }

    /// Ratio of bytes written to bytes read.
    ///
    /// Plain copies report `1.0`; numbering and escaping push it above one,
    /// squeezing can pull it below. Empty input reports `0.0`.
    #[allow(clippy::cast_precision_loss)]
    pub fn expansion_ratio(&self) -> f64 {
        if self.bytes_read == 0 {
            0.0
        } else {
            self.bytes_written as f64 / self.bytes_read as f64
        }
    }
}
