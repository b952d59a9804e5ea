//! Size-rotated log file writer.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tracing_subscriber::fmt::MakeWriter;

use crate::ring::RecentLines;

/// When to rotate and how many backups to keep
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationPolicy {
    /// Rotate once the active file reaches this size
    pub max_bytes: u64,
    /// Backups kept next to the active file
    pub max_files: usize,
}

impl Default for RotationPolicy {
    fn default() -> Self {
        Self {
            max_bytes: 1024 * 1024,
            max_files: 5,
        }
    }
}

struct RollingFile {
    dir: PathBuf,
    app_name: String,
    policy: RotationPolicy,
    file: File,
    written: u64,
}

impl RollingFile {
    fn active_path(dir: &Path, app_name: &str) -> PathBuf {
        dir.join(format!("{}.log", app_name))
    }

    fn backup_path(&self, index: usize) -> PathBuf {
        self.dir.join(format!("{}.{}.log", self.app_name, index))
    }

    fn open_active(dir: &Path, app_name: &str) -> io::Result<(File, u64)> {
        let path = Self::active_path(dir, app_name);
        let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
        let header = format!(
            "=== {} session {} ===\n",
            app_name,
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f")
        );
        file.write_all(header.as_bytes())?;
        let written = file.metadata()?.len();
        Ok((file, written))
    }

    /// Shift `<app>.N.log` up by one, dropping the oldest, then start fresh.
    fn rotate(&mut self) -> io::Result<()> {
        self.file.flush()?;

        if self.policy.max_files == 0 {
            fs::remove_file(Self::active_path(&self.dir, &self.app_name))?;
        } else {
            let oldest = self.backup_path(self.policy.max_files);
            if oldest.exists() {
                fs::remove_file(&oldest)?;
            }
            for index in (1..self.policy.max_files).rev() {
                let from = self.backup_path(index);
                if from.exists() {
                    fs::rename(&from, self.backup_path(index + 1))?;
                }
            }
            fs::rename(
                Self::active_path(&self.dir, &self.app_name),
                self.backup_path(1),
            )?;
        }

        let (file, written) = Self::open_active(&self.dir, &self.app_name)?;
        self.file = file;
        self.written = written;
        Ok(())
    }

    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.written > 0 && self.written + buf.len() as u64 > self.policy.max_bytes {
            self.rotate()?;
        }
        self.file.write_all(buf)?;
        self.written += buf.len() as u64;
        Ok(buf.len())
    }
}

/// `MakeWriter` handing out clones that share one rotating file.
#[derive(Clone)]
pub struct RollingWriter {
    file: Arc<Mutex<RollingFile>>,
    recent: Option<RecentLines>,
}

impl RollingWriter {
    pub fn open(
        dir: PathBuf,
        app_name: &str,
        policy: RotationPolicy,
        recent: Option<RecentLines>,
    ) -> io::Result<Self> {
        fs::create_dir_all(&dir)?;
        let (file, written) = RollingFile::open_active(&dir, app_name)?;
        Ok(Self {
            file: Arc::new(Mutex::new(RollingFile {
                dir,
                app_name: app_name.to_string(),
                policy,
                file,
                written,
            })),
            recent,
        })
    }
}

impl Write for RollingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if let Some(recent) = &self.recent {
            recent.push_chunk(&String::from_utf8_lossy(buf));
        }
        let mut file = self
            .file
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log file lock poisoned"))?;
        file.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut file = self
            .file
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log file lock poisoned"))?;
        file.file.flush()
    }
}

impl<'a> MakeWriter<'a> for RollingWriter {
    type Writer = RollingWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
