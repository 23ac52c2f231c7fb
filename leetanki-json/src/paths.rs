use directories::ProjectDirs;
use std::path::{Path, PathBuf};

const STORE_FILE: &str = "problems.json";

/// Where the problem file and its backups live.
///
/// Without an explicit file both go under the per-user data dir
/// (`problems.json` and `backups/`), or the current dir when none exists.
/// An explicit file keeps its backups beside it: `x.json` gets `x.backups/`.
pub fn store_paths(file: Option<&Path>) -> (PathBuf, PathBuf) {
    match file {
        Some(f) => (f.to_path_buf(), f.with_extension("backups")),
        None => {
            let root = ProjectDirs::from("com", "leetanki", "LeetAnki")
                .map(|pd| pd.data_dir().to_path_buf())
                .or_else(|| std::env::current_dir().ok())
                .unwrap_or_else(|| PathBuf::from("."));
            (root.join(STORE_FILE), root.join("backups"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_file_keeps_backups_beside_it() {
        let (file, backups) = store_paths(Some(Path::new("/tmp/deck/problems.json")));
        assert_eq!(file, PathBuf::from("/tmp/deck/problems.json"));
        assert_eq!(backups, PathBuf::from("/tmp/deck/problems.backups"));
    }

    #[test]
    fn default_layout() {
        let (file, backups) = store_paths(None);
        assert!(file.ends_with(STORE_FILE));
        assert_eq!(file.parent(), backups.parent());
    }
}
