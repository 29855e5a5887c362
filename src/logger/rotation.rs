//! Size based file rotation

use crate::logger::config::RotationConfig;
use crate::logger::error::LoggerError;
use jiff::Zoned;
use std::fs;
use std::path::{Path, PathBuf};

/// Decides when the active log file is full and moves it aside.
///
/// Rotated files are named `<stem>.<YYYYmmdd_HHMMSS>-<seq>.<ext>` so that
/// lexical order is age order and cleanup needs no filesystem timestamps.
pub struct RotationManager {
    config: RotationConfig,
    sequence: u32,
}

impl RotationManager {
    pub fn new(config: RotationConfig) -> Self {
        Self {
            config,
            sequence: 0,
        }
    }

    pub fn should_rotate(&self, current_file_size: u64) -> bool {
        current_file_size >= self.config.max_size
    }

    pub fn rotate(&mut self, current_path: &Path) -> Result<PathBuf, LoggerError> {
        let rotated_path = self.next_rotated_path(current_path);
        if current_path.exists() {
            fs::rename(current_path, &rotated_path)?;
        }
        self.cleanup_old_files(current_path)?;
        Ok(rotated_path)
    }

    fn next_rotated_path(&mut self, base_path: &Path) -> PathBuf {
        self.sequence = self.sequence.wrapping_add(1);
        let timestamp = Zoned::now().strftime("%Y%m%d_%H%M%S");
        let stem = base_path.file_stem().unwrap_or_default().to_string_lossy();
        let ext = base_path.extension().unwrap_or_default().to_string_lossy();

        let name = if ext.is_empty() {
            format!("{}.{}-{:04}", stem, timestamp, self.sequence)
        } else {
            format!("{}.{}-{:04}.{}", stem, timestamp, self.sequence, ext)
        };
        base_path.with_file_name(name)
    }

    /// Deletes the oldest rotated files until at most `max_files` remain.
    fn cleanup_old_files(&self, base_path: &Path) -> Result<(), LoggerError> {
        let parent = match base_path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let prefix = format!(
            "{}.",
            base_path.file_stem().unwrap_or_default().to_string_lossy()
        );
        let active = base_path.file_name().map(|n| n.to_os_string());

        let mut rotated: Vec<PathBuf> = fs::read_dir(parent)?
            .filter_map(|entry| entry.ok())
            .filter(|entry| Some(entry.file_name()) != active)
            .filter(|entry| entry.file_name().to_string_lossy().starts_with(&prefix))
            .map(|entry| entry.path())
            .collect();
        rotated.sort();

        let excess = rotated.len().saturating_sub(self.config.max_files);
        for old in rotated.iter().take(excess) {
            fs::remove_file(old).map_err(|e| {
                LoggerError::rotation(format!("failed to remove {}: {}", old.display(), e))
            })?;
        }
        Ok(())
    }
}
