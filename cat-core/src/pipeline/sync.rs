//! Synchronous copy and transform pipelines.

use std::io::{self, Read, Write};

use tracing::{debug, trace};

use crate::config::{BlockSizes, StreamSummary};
use crate::error::{Error, Result};
use crate::escape::escape_into;
use crate::options::DisplayOptions;
use crate::state::{BlankRun, RunState};

/// Copies a reader into a writer byte for byte.
///
/// Every chunk read is written out in full before the next read.
///
/// # Parameters
///
/// * `reader` - Input source implementing [`Read`] trait
/// * `writer` - Output destination implementing [`Write`] trait
/// * `sizes` - Block sizes; the read buffer holds [`BlockSizes::read_capacity`] bytes
///
/// # Returns
///
/// Returns a [`StreamSummary`] with the number of bytes copied.
///
/// # Errors
///
/// This function will return an error if:
///
/// - The reader fails ([`Error::Read`])
/// - The writer fails ([`Error::Write`])
/// - The writer stops accepting bytes mid-chunk ([`Error::ShortWrite`])
pub fn copy<R, W>(mut reader: R, mut writer: W, sizes: BlockSizes) -> Result<StreamSummary>
where
    R: Read,
    W: Write,
{
    let mut buf = vec![0u8; sizes.read_capacity()];
    let mut total = 0u64;

    loop {
        let read = read_chunk(&mut reader, &mut buf)?;
        if read == 0 {
            writer.flush().map_err(Error::Write)?;
            return Ok(StreamSummary::new(total, total));
        }
        write_block(&mut writer, &buf[..read])?;
        total += read as u64;
    }
}

/// Streams a reader into a writer, rendering lines according to `options`.
///
/// Lines are rebuilt across read boundaries, so the output does not depend
/// on how the reader splits its data. `state` carries the line counter and
/// blank-line tracking from earlier inputs and is updated in place for the
/// next one.
///
/// Output is buffered and written in whole [`BlockSizes::output`] blocks.
/// Whatever is still buffered goes out before the function returns, on
/// success and on read failure alike. When a read comes back short the
/// buffer is flushed before the next read so interactive sources see their
/// lines promptly.
///
/// # Parameters
///
/// * `reader` - Input source implementing [`Read`] trait
/// * `writer` - Output destination implementing [`Write`] trait
/// * `options` - Display options [`DisplayOptions`]
/// * `state` - Run state shared with the previous and following inputs
/// * `sizes` - Read buffer capacity and output block size
///
/// # Returns
///
/// Returns a [`StreamSummary`] with bytes read from `reader` and bytes written
/// to `writer`.
///
/// # Errors
///
/// This function will return an error if:
///
/// - The reader fails ([`Error::Read`]); buffered output is written first
/// - The writer fails ([`Error::Write`])
/// - The writer stops accepting bytes mid-block ([`Error::ShortWrite`])
pub fn transform<R, W>(
    mut reader: R,
    writer: W,
    options: &DisplayOptions,
    state: &mut RunState,
    sizes: BlockSizes,
) -> Result<StreamSummary>
where
    R: Read,
    W: Write,
{
    let mut input = vec![0u8; sizes.read_capacity()];
    let mut engine = LineEngine::new(writer, options, sizes.output());
    let mut total_in = 0u64;
    let mut short_read = false;

    debug!(
        capacity = input.len(),
        block = sizes.output(),
        line_start = !state.mid_line,
        "transform started"
    );

    loop {
        if short_read {
            engine.flush_all()?;
        }

        let read = match read_chunk(&mut reader, &mut input) {
            Ok(read) => read,
            Err(err) => {
                engine.flush_all()?;
                return Err(err);
            }
        };
        if read == 0 {
            engine.flush_all()?;
            return Ok(StreamSummary::new(total_in, engine.written));
        }

        trace!(read, "input chunk");
        short_read = read < input.len();
        total_in += read as u64;
        engine.feed(&input[..read], state)?;
    }
}

/// Output side of [`transform`]: renders lines into a block buffer.
struct LineEngine<'o, W> {
    writer: W,
    options: &'o DisplayOptions,
    output: Vec<u8>,
    block: usize,
    written: u64,
}

impl<'o, W: Write> LineEngine<'o, W> {
    fn new(writer: W, options: &'o DisplayOptions, block: usize) -> Self {
        Self {
            writer,
            options,
            output: Vec::with_capacity(block.saturating_mul(2)),
            block,
            written: 0,
        }
    }

    /// Renders one chunk of input. The chunk may start or end mid-line.
    fn feed(&mut self, mut chunk: &[u8], state: &mut RunState) -> Result<()> {
        while let Some(&first) = chunk.first() {
            if !state.mid_line {
                if first == b'\n' {
                    chunk = &chunk[1..];
                    state.blank_run = state.blank_run.bump();
                    if self.options.squeeze_blank() && state.blank_run == BlankRun::Many {
                        continue;
                    }
                    if self.options.numbers_blank_lines() {
                        self.output.extend_from_slice(state.line_number.next());
                    }
                    self.end_line();
                    self.write_full_blocks()?;
                    continue;
                }

                state.blank_run = BlankRun::None;
                if self.options.numbers_lines() {
                    self.output.extend_from_slice(state.line_number.next());
                }
                state.mid_line = true;
            }

            // End of the chunk stands in for a newline when bounding the scan.
            let (line, rest, complete) = match chunk.iter().position(|&b| b == b'\n') {
                Some(end) => (&chunk[..end], &chunk[end + 1..], true),
                None => (chunk, &chunk[chunk.len()..], false),
            };

            if self.options.escapes_bytes() {
                escape_into(line, self.options, &mut self.output);
            } else {
                self.output.extend_from_slice(line);
            }
            if complete {
                self.end_line();
                state.mid_line = false;
            }

            chunk = rest;
            self.write_full_blocks()?;
        }
        Ok(())
    }

    fn end_line(&mut self) {
        if self.options.show_ends() {
            self.output.push(b'$');
        }
        self.output.push(b'\n');
    }

    /// Writes every complete block and keeps the remainder buffered.
    fn write_full_blocks(&mut self) -> Result<()> {
        if self.output.len() < self.block {
            return Ok(());
        }

        let full = self.output.len() - self.output.len() % self.block;
        for block in self.output[..full].chunks(self.block) {
            write_block(&mut self.writer, block)?;
        }
        self.output.drain(..full);
        self.written += full as u64;
        Ok(())
    }

    /// Writes everything buffered, including a trailing partial block.
    fn flush_all(&mut self) -> Result<()> {
        self.write_full_blocks()?;
        if !self.output.is_empty() {
            write_block(&mut self.writer, &self.output)?;
            self.written += self.output.len() as u64;
            self.output.clear();
        }
        self.writer.flush().map_err(Error::Write)
    }
}

/// Issues one read, retrying if it was interrupted before any data arrived.
fn read_chunk<R: Read>(reader: &mut R, buf: &mut [u8]) -> Result<usize> {
    loop {
        match reader.read(buf) {
            Ok(read) => return Ok(read),
            Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
            Err(err) => return Err(Error::Read(err)),
        }
    }
}

/// Writes all of `block`, continuing after partial writes.
///
/// Behaves like [`Write::write_all`] but keeps count, so a sink that stops
/// accepting bytes (a write returning zero) is reported with how far it got.
fn write_block<W: Write>(writer: &mut W, block: &[u8]) -> Result<()> {
    let mut written = 0;
    while written < block.len() {
        match writer.write(&block[written..]) {
            Ok(0) => {
                return Err(Error::ShortWrite {
                    requested: block.len(),
                    written,
                })
            }
            Ok(n) => written += n,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
            Err(err) if err.kind() == io::ErrorKind::WriteZero => {
                return Err(Error::ShortWrite {
                    requested: block.len(),
                    written,
                })
            }
            Err(err) => return Err(Error::Write(err)),
        }
    }
    Ok(())
}
