use leetanki_core::{CoreError, Problem, ProblemStore};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};

pub mod paths;

pub const DEFAULT_MAX_BACKUPS: usize = 10;

/// The problem collection as a single JSON array on disk.
#[derive(Debug)]
pub struct JsonStore {
    path: PathBuf,
    backups_dir: PathBuf,
    max_backups: usize,
}

impl JsonStore {
    pub fn open_default() -> Result<Self, CoreError> {
        let (file, backups) = paths::store_paths(None);
        Self::open(file, backups, DEFAULT_MAX_BACKUPS)
    }

    /// Does not create the file; that happens on the first save.
    pub fn open(path: PathBuf, backups_dir: PathBuf, max_backups: usize) -> Result<Self, CoreError> {
        ensure_parent_dirs(&path)?;
        Ok(Self {
            path,
            backups_dir,
            max_backups: max_backups.max(1),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn backups_dir(&self) -> &Path {
        &self.backups_dir
    }
}

impl ProblemStore for JsonStore {
    fn load_all(&self) -> Result<Vec<Problem>, CoreError> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no problem file yet");
            return Ok(Vec::new());
        }
        let buf = fs::read_to_string(&self.path).map_err(|e| io_error(&self.path, e))?;
        let problems: Vec<Problem> = serde_json::from_str(&buf)
            .map_err(|e| CoreError::Storage(format!("{}: {e}", self.path.display())))?;
        for (i, p) in problems.iter().enumerate() {
            p.check_state().map_err(|e| {
                CoreError::Storage(format!("{}: record {}: {e}", self.path.display(), i + 1))
            })?;
        }
        debug!(path = %self.path.display(), count = problems.len(), "loaded problems");
        Ok(problems)
    }

    fn save_all(&self, problems: &[Problem]) -> Result<(), CoreError> {
        let json = serde_json::to_vec_pretty(problems)
            .map_err(|e| CoreError::Storage(format!("serialize: {e}")))?;
        write_with_backup(&self.path, &self.backups_dir, self.max_backups, &json)
            .map_err(|e| io_error(&self.path, e))?;
        info!(path = %self.path.display(), count = problems.len(), "saved problems");
        Ok(())
    }
}

fn io_error(path: &Path, e: std::io::Error) -> CoreError {
    CoreError::Storage(format!("{}: {e}", path.display()))
}

fn ensure_parent_dirs(path: &Path) -> Result<(), CoreError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| io_error(parent, e))?;
    }
    Ok(())
}

fn parent_or_cwd(path: &Path) -> &Path {
    path.parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."))
}

fn write_with_backup(path: &Path, backups_dir: &Path, max_backups: usize, json: &[u8]) -> Result<(), std::io::Error> {
    let dir = parent_or_cwd(path);
    fs::create_dir_all(dir)?;
    fs::create_dir_all(backups_dir)?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(json)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;

    // Backup rotation
    let ts = chrono::Local::now().format("%Y%m%d-%H%M%S%.3f");
    let backup_path = backups_dir.join(format!("problems-{ts}.json"));
    let mut btmp = NamedTempFile::new_in(backups_dir)?;
    btmp.write_all(json)?;
    btmp.flush()?;
    btmp.persist(&backup_path).map_err(|e| e.error)?;

    rotate_backups(backups_dir, max_backups)
}

fn rotate_backups(dir: &Path, keep: usize) -> Result<(), std::io::Error> {
    let mut entries: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.extension().and_then(|s| s.to_str()) == Some("json"))
        .collect();
    // timestamped names sort chronologically
    entries.sort();
    if entries.len() > keep {
        for p in &entries[..entries.len() - keep] {
            debug!(path = %p.display(), "removing old backup");
            let _ = fs::remove_file(p);
        }
    }
    Ok(())
}
