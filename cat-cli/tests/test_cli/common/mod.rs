use std::fs;
use std::path::Path;
use std::process::{ExitStatus, Stdio};

use tokio::io::AsyncWriteExt;


pub use data::{
    all_bytes, generate_lines, generate_random_data, generate_random_data_with_seed,
    BINARY_DATA, MIXED_LINES, SAMPLE_TEXT,
};

/// Type of binary to execute
#[derive(Debug, Clone)]
pub enum BinaryType {
    /// Our own `cat` built by cargo
    Cargo,
    /// System binary available in PATH
    System(String),
}

impl BinaryType {
    /// Create a new system binary type
    pub fn system(name: impl Into<String>) -> Self {
        Self::System(name.into())
    }

    /// Returns the path to the binary for this variant.
    ///
    /// # Panics
    ///
    /// Panics if a system binary cannot be found.
    fn get_path(&self) -> String {
        match self {
            BinaryType::Cargo => env!("CARGO_BIN_EXE_cat").to_string(),
            BinaryType::System(name) => find_system_binary(name)
                .unwrap_or_else(|| panic!("Binary {name} not found in PATH")),
        }
    }
}

/// Find a system binary in PATH
fn find_system_binary(name: &str) -> Option<String> {
    if let Ok(path) = which::which(name) {
        return Some(path.to_string_lossy().to_string());
    }

    let common_paths = ["/usr/bin", "/usr/local/bin", "/bin"];

    for base_path in &common_paths {
        let full_path = Path::new(base_path).join(name);
        if full_path.is_file() {
            return Some(full_path.to_string_lossy().to_string());
        }
    }

    None
}

/// Output from running a binary command
#[derive(Eq, PartialEq)]
pub struct Output {
    pub status: ExitStatus,
    pub stdout_raw: Vec<u8>,
    pub stdout: String,
    pub stderr: String,
}

/// Compare stdout and exit status of two command outputs
///
/// Diagnostics are not compared: they carry the program path.
///
/// # Panics
///
/// Panics if the outputs differ.
pub fn compare_outputs(output_1: &Output, output_2: &Output) {
    assert_eq!(output_1.status.success(), output_2.status.success());
    assert!(output_1.stdout_raw == output_2.stdout_raw);
}

/// Shared test fixture utilities to keep filesystem interactions isolated
pub struct Fixture {
    root_dir: tempfile::TempDir,
}

impl Fixture {
    /// Create an empty fixture
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created.
    pub fn empty() -> Self {
        Self {
            root_dir: tempfile::TempDir::new().unwrap(),
        }
    }

    /// Create fixture with multiple files
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created or if any fixture file
    /// cannot be written.
    pub fn with_files(names: &[&str], contents: &[&[u8]]) -> Self {
        let fixture = Self::empty();
        for (name, contents) in names.iter().zip(contents) {
            fs::write(fixture.root_dir.path().join(name), contents).unwrap();
        }
        fixture
    }

    /// Create fixture with single file
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created or if the fixture file
    /// cannot be written.
    pub fn with_file(name: &str, contents: &[u8]) -> Self {
        Self::with_files(&[name], &[contents])
    }

    /// Create a subdirectory inside the fixture
    ///
    /// # Panics
    ///
    /// Panics if the directory cannot be created.
    pub fn create_dir(&self, name: &str) {
        fs::create_dir(self.root_dir.path().join(name)).unwrap();
    }

    /// Get full path for a file in the fixture
    pub fn path(&self, name: &str) -> String {
        format!("{}/{}", self.root_dir.path().display(), name)
    }

    /// Run our `cat` with the specified arguments
    pub async fn run_cargo(&mut self, args: &[&str]) -> Output {
        self.run(BinaryType::Cargo, args, None).await
    }

    /// Run our `cat` with the specified arguments and stdin bytes
    pub async fn run_cargo_with_stdin(&mut self, args: &[&str], stdin: &[u8]) -> Output {
        self.run(BinaryType::Cargo, args, Some(stdin)).await
    }

    /// Run a system binary with the specified arguments if available
    pub async fn run_system(&mut self, name: &str, args: &[&str]) -> Option<Output> {
        self.run_system_with_stdin(name, args, &[]).await
    }

    /// Run a system binary with stdin bytes if available
    pub async fn run_system_with_stdin(
        &mut self,
        name: &str,
        args: &[&str],
        stdin: &[u8],
    ) -> Option<Output> {
        find_system_binary(name)?;
        Some(self.run(BinaryType::system(name), args, Some(stdin)).await)
    }

    /// Run a binary with the specified arguments and optional stdin bytes
    ///
    /// # Panics
    ///
    /// Panics if the process cannot be spawned, if writing to stdin fails, or if
    /// awaiting process output fails.
    async fn run(&mut self, binary_type: BinaryType, args: &[&str], stdin: Option<&[u8]>) -> Output {
        let bin_path = binary_type.get_path();
        let mut child = tokio::process::Command::new(&bin_path)
            .args(args)
            .current_dir(self.root_dir.path())
            .env_remove("CAT_LOG")
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .stdin(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .unwrap();

        // Feed stdin from its own task so a child blocked on a full stdout
        // pipe cannot stall the writer. Dropping the handle sends EOF.
        let child_stdin = child.stdin.take();
        let stdin_bytes = stdin.map(<[u8]>::to_vec).unwrap_or_default();
        let feeder = tokio::spawn(async move {
            let Some(mut child_stdin) = child_stdin else {
                return;
            };
            if let Err(err) = child_stdin.write_all(&stdin_bytes).await {
                // The child may exit before reading all of its input.
                if err.kind() != std::io::ErrorKind::BrokenPipe {
                    panic!("failed write to stdin ({} bytes): {err}", stdin_bytes.len());
                }
            }
        });

        // Read stdout and stderr while waiting so large outputs cannot fill the pipes.
        let raw_output = child.wait_with_output().await.unwrap();
        feeder.await.unwrap();
        Output {
            status: raw_output.status,
            stdout: String::from_utf8_lossy(&raw_output.stdout).into_owned(),
            stdout_raw: raw_output.stdout,
            stderr: String::from_utf8_lossy(&raw_output.stderr).into_owned(),
        }
    }
}
