use std::fs::{self, File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Maximum log file size before rotation (5 MB)
const MAX_LOG_SIZE: u64 = 5 * 1024 * 1024;
/// Size to keep after rotation (1 MB of most recent logs)
const KEEP_SIZE: u64 = 1024 * 1024;

/// Rotate the log if it exceeds `max_size`, keeping the most recent
/// `keep_size` bytes aligned to a line boundary.
fn rotate_oversized_log(log_path: &Path, max_size: u64, keep_size: u64) -> std::io::Result<()> {
    if !log_path.exists() {
        return Ok(());
    }

    let metadata = fs::metadata(log_path)?;
    if metadata.len() <= max_size {
        return Ok(());
    }

    // Read the tail we intend to keep
    let mut file = File::open(log_path)?;
    let start_pos = metadata.len().saturating_sub(keep_size);
    file.seek(SeekFrom::Start(start_pos))?;
    let mut buffer = Vec::new();
    file.read_to_end(&mut buffer)?;
    drop(file);

    // Skip to the first newline to avoid a partial first line
    let skip = buffer
        .iter()
        .position(|&b| b == b'\n')
        .map(|i| i + 1)
        .unwrap_or(0);
    let trimmed = &buffer[skip..];

    let mut file = File::create(log_path)?;
    file.write_all(b"--- Log rotated (older entries removed) ---\n")?;
    file.write_all(trimmed)?;

    Ok(())
}

/// A writer factory that produces writers for the shared log file
#[derive(Clone)]
struct LogWriterFactory {
    file: Arc<Mutex<File>>,
}

impl LogWriterFactory {
    fn new(file: File) -> Self {
        Self {
            file: Arc::new(Mutex::new(file)),
        }
    }
}

/// A writer that holds a reference to the shared file
struct LogWriter {
    file: Arc<Mutex<File>>,
}

impl Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let mut file = self.file.lock().unwrap();
        file.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        let mut file = self.file.lock().unwrap();
        file.flush()
    }
}

impl<'a> MakeWriter<'a> for LogWriterFactory {
    type Writer = LogWriter;

    fn make_writer(&'a self) -> Self::Writer {
        LogWriter {
            file: self.file.clone(),
        }
    }
}

/// Initialize logging to a file in the log directory.
///
/// Logs go to `{log_dir}/tailboard.log` with size-based rotation: past
/// 5MB, older entries are dropped keeping the most recent 1MB. The log
/// level comes from the `level` parameter or the `RUST_LOG`
/// environment variable.
pub fn init_logging(log_dir: &Path, level: &str) -> color_eyre::Result<()> {
    std::fs::create_dir_all(log_dir)?;

    let log_path = log_dir.join("tailboard.log");

    if let Err(e) = rotate_oversized_log(&log_path, MAX_LOG_SIZE, KEEP_SIZE) {
        eprintln!("Warning: Failed to rotate log file: {e}");
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    let writer_factory = LogWriterFactory::new(file);

    // Filter from RUST_LOG env var, falling back to the provided level
    let default_filter = format!("tailboard={level},tailboard_core=warn");
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(writer_factory)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false),
        )
        .init();

    tracing::info!(
        "Tailboard logging initialized (log_path={})",
        log_path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test that rotation keeps only a line-aligned tail
    #[test]
    fn test_rotation_keeps_line_aligned_tail() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tailboard.log");

        let mut contents = String::new();
        for i in 0..200 {
            contents.push_str(&format!("log line number {i}\n"));
        }
        std::fs::write(&path, &contents).unwrap();

        rotate_oversized_log(&path, 1024, 256).unwrap();

        let rotated = std::fs::read_to_string(&path).unwrap();
        assert!(rotated.starts_with("--- Log rotated"));
        assert!(
            rotated.len() <= 256 + 64,
            "Rotated file should be near the keep size, got {} bytes",
            rotated.len()
        );

        // Every kept entry should be a complete line
        let first_entry = rotated.lines().nth(1).unwrap();
        assert!(
            first_entry.starts_with("log line number"),
            "Partial first line survived rotation: {first_entry}"
        );
    }

    /// Test that an undersized log is left alone
    #[test]
    fn test_small_log_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tailboard.log");
        std::fs::write(&path, "tiny\n").unwrap();

        rotate_oversized_log(&path, 1024, 256).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "tiny\n");
    }

    /// Test that a missing log file is not an error
    #[test]
    fn test_missing_log_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does_not_exist.log");
        assert!(rotate_oversized_log(&path, 1024, 256).is_ok());
    }
}
