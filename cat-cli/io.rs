//! Input and output handles for the cat CLI.

use std::fs::File;
use std::io::{self, Read};

use crate::config::STDIN_PATH;
use crate::error::{Error, Result};

/// An opened input: a regular file or standard input.
///
/// Dropping an `Input::File` closes the file.
#[derive(Debug)]
pub enum Input {
    /// Standard input, shared by every `-` on the command line
    Stdin(io::Stdin),
    /// A file opened for reading
    File(File),
}

impl Input {
    /// Preferred I/O block size reported by the operating system, if any.
    pub fn native_block_size(&self) -> Option<u64> {
        match self {
            Input::Stdin(_) => stdin_block_size(),
            Input::File(file) => native_block_size(file),
        }
    }

    /// Returns `true` if this input is standard input.
    pub fn is_stdin(&self) -> bool {
        matches!(self, Input::Stdin(_))
    }
}

impl Read for Input {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            Input::Stdin(stdin) => stdin.read(buf),
            Input::File(file) => file.read(buf),
        }
    }
}

/// Opens an input for the given path, or stdin if path is `-`.
///
/// # Parameters
///
/// * `path` - Path to the input file, or `-` for stdin
///
/// # Errors
///
/// Returns [`Error::OpenInput`] if the file cannot be opened.
pub fn open_input(path: &str) -> Result<Input> {
    if path == STDIN_PATH {
        return Ok(Input::Stdin(io::stdin()));
    }

    let file = File::open(path).map_err(|source| Error::OpenInput {
        path: path.to_string(),
        source,
    })?;
    Ok(Input::File(file))
}

/// The output sink together with its preferred block size.
#[derive(Debug)]
pub struct Output<W> {
    writer: W,
    native_block_size: Option<u64>,
}

impl<W: io::Write> Output<W> {
    /// Wraps a writer whose preferred block size is `native_block_size`.
    pub fn new(writer: W, native_block_size: Option<u64>) -> Self {
        Self {
            writer,
            native_block_size,
        }
    }

    /// Preferred I/O block size of the sink, if known.
    pub fn native_block_size(&self) -> Option<u64> {
        self.native_block_size
    }

    /// Mutable access to the underlying writer.
    pub fn writer(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Consumes the output and returns the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Opens standard output for block writes.
///
/// On Unix the descriptor is duplicated into a [`File`] so every block
/// goes to the kernel without another layer of buffering. Elsewhere the process
/// stdout handle is used directly.
///
/// # Errors
///
/// Returns [`Error::OpenOutput`] if the descriptor cannot be duplicated.
pub fn open_stdout() -> Result<Output<Box<dyn io::Write>>> {
    #[cfg(unix)]
    {
        let file =
            duplicate_std_handle(&io::stdout()).map_err(|source| Error::OpenOutput { source })?;
        let block_size = native_block_size(&file);
        Ok(Output::new(Box::new(file), block_size))
    }

    #[cfg(not(unix))]
    {
        Ok(Output::new(Box::new(io::stdout()), None))
    }
}

/// Preferred block size of an open file (`st_blksize`).
#[cfg(unix)]
pub fn native_block_size(file: &File) -> Option<u64> {
    use std::os::unix::fs::MetadataExt;

    file.metadata().ok().map(|meta| meta.blksize())
}

/// Preferred block size of an open file; unknown on this platform.
#[cfg(not(unix))]
pub fn native_block_size(_file: &File) -> Option<u64> {
    None
}

#[cfg(unix)]
fn stdin_block_size() -> Option<u64> {
    duplicate_std_handle(&io::stdin())
        .ok()
        .and_then(|file| native_block_size(&file))
}

#[cfg(not(unix))]
fn stdin_block_size() -> Option<u64> {
    None
}

#[cfg(unix)]
fn duplicate_std_handle(handle: &impl std::os::fd::AsFd) -> io::Result<File> {
    let fd = handle.as_fd().try_clone_to_owned()?;
    Ok(File::from(fd))
}
