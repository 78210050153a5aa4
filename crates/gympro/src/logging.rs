use std::fs::{self, File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Log file name inside the data directory
pub const LOG_FILE_NAME: &str = "gympro.log";

/// Trim the log once it grows past this size (5 MB)
const MAX_LOG_SIZE: u64 = 5 * 1024 * 1024;
/// Most recent bytes kept after trimming (1 MB)
const KEEP_SIZE: u64 = 1024 * 1024;

/// Drop all but the newest `KEEP_SIZE` bytes of an oversized log file.
fn trim_log_if_needed(log_path: &Path) -> std::io::Result<bool> {
    let size = match fs::metadata(log_path) {
        Ok(metadata) => metadata.len(),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(e),
    };
    if size <= MAX_LOG_SIZE {
        return Ok(false);
    }

    let mut tail = Vec::with_capacity(KEEP_SIZE as usize);
    {
        let mut file = File::open(log_path)?;
        file.seek(SeekFrom::Start(size - KEEP_SIZE))?;
        file.read_to_end(&mut tail)?;
    }

    // Start at a line boundary
    let start = tail
        .iter()
        .position(|&b| b == b'\n')
        .map(|i| i + 1)
        .unwrap_or(0);

    let mut file = File::create(log_path)?;
    file.write_all(b"--- Log trimmed (older entries removed) ---\n")?;
    file.write_all(&tail[start..])?;
    Ok(true)
}

/// Initialize logging to `{data_dir}/gympro.log`.
///
/// The terminal belongs to the TUI, so nothing is written to stdout/stderr.
/// `RUST_LOG` overrides `level`. The returned guard must be held until exit
/// or buffered lines are lost.
pub fn init_logging(data_dir: &Path, level: &str) -> color_eyre::Result<WorkerGuard> {
    fs::create_dir_all(data_dir)?;

    let log_path = data_dir.join(LOG_FILE_NAME);

    let trimmed = trim_log_if_needed(&log_path);

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;
    let (writer, guard) = tracing_appender::non_blocking(file);

    let default_filter = format!("gympro={level},gympro_core={level}");
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false),
        )
        .try_init()?;

    match trimmed {
        Ok(true) => tracing::info!("Log file exceeded size limit and was trimmed"),
        Ok(false) => {}
        Err(e) => tracing::warn!(error = %e, "Failed to trim log file"),
    }
    tracing::info!(log_path = %log_path.display(), "GymPro logging initialized");

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_skips_small_or_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(LOG_FILE_NAME);
        assert!(!trim_log_if_needed(&path).unwrap());

        fs::write(&path, "one line\n").unwrap();
        assert!(!trim_log_if_needed(&path).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "one line\n");
    }

    #[test]
    fn test_trim_keeps_recent_tail_on_line_boundary() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(LOG_FILE_NAME);

        let line = "x".repeat(99) + "\n";
        let count = (MAX_LOG_SIZE as usize / line.len()) + 10;
        let mut content = line.repeat(count);
        content.push_str("last entry\n");
        fs::write(&path, &content).unwrap();

        assert!(trim_log_if_needed(&path).unwrap());

        let trimmed = fs::read_to_string(&path).unwrap();
        assert!(trimmed.starts_with("--- Log trimmed"));
        assert!(trimmed.ends_with("last entry\n"));
        assert!((trimmed.len() as u64) <= KEEP_SIZE + 64);
        // Every kept line is complete
        for kept in trimmed.lines().skip(1) {
            assert!(kept == "last entry" || kept.len() == 99);
        }
    }
}
