use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

/// Self-documenting header written at the top of a new recovery log.
const FILE_HEADER: &str = "\
<!-- ticked recovery log — append-only error recovery data
     This file captures item data that ticked couldn't save normally.
     If something went missing, check here.
     Safe to delete if empty or stale. -->

---
";

/// Return the path to the recovery log file.
pub fn recovery_log_path(data_dir: &Path) -> PathBuf {
    data_dir.join(".recovery.log")
}

/// Write `content` to `path` atomically using a temp file + rename.
pub fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Append a write-failure entry to the recovery log: what failed, why, and
/// the payload that could not be persisted. Best-effort; if the log itself
/// cannot be written there is nowhere left to report.
pub fn log_write_failure(data_dir: &Path, target: &str, error: &io::Error, body: &str) {
    let path = recovery_log_path(data_dir);
    let is_new = !path.exists();

    let mut entry = String::new();
    if is_new {
        entry.push_str(FILE_HEADER);
    }
    entry.push_str(&format!(
        "## {} — write failed: {}\n",
        chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
        target,
    ));
    entry.push_str(&format!("- Error: {}\n\n", error));
    entry.push_str("```\n");
    entry.push_str(body);
    if !body.ends_with('\n') {
        entry.push('\n');
    }
    entry.push_str("```\n\n---\n");

    let _ = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .and_then(|mut f| f.write_all(entry.as_bytes()));
}
