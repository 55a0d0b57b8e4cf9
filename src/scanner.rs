use crate::constants::SUPPORTED_JPEG_EXTENSIONS;
use crate::error::Result;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use walkdir::WalkDir;

/// A JPEG found in the input directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedFile {
    pub path: PathBuf,
    pub filename: String,
    pub modified: SystemTime,
}

/// Scans a single directory level for `.jpg`/`.jpeg` files.
///
/// Results are ordered by modification time (oldest first); files with the
/// same mtime are ordered by filename. Directories and other extensions are
/// skipped. An empty directory yields an empty list.
///
/// # Errors
/// Fails if the directory cannot be listed or a matching entry cannot be
/// stat'ed.
pub fn scan_directory(dir: &Path) -> Result<Vec<ScannedFile>> {
    let canonical_dir = dir.canonicalize()?;
    let mut files = Vec::new();

    for entry in WalkDir::new(&canonical_dir).min_depth(1).max_depth(1) {
        let entry = entry?;
        if !entry.file_type().is_file() || !is_jpeg_file(entry.path()) {
            continue;
        }

        let modified = entry.metadata()?.modified()?;
        files.push(ScannedFile {
            path: entry.path().to_path_buf(),
            filename: entry.file_name().to_string_lossy().into_owned(),
            modified,
        });
    }

    files.sort_by(|a, b| {
        a.modified
            .cmp(&b.modified)
            .then_with(|| a.filename.cmp(&b.filename))
    });

    Ok(files)
}

/// Counts every regular file one level deep, regardless of extension.
pub fn count_files(dir: &Path) -> Result<usize> {
    let mut count = 0;
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        if entry?.file_type().is_file() {
            count += 1;
        }
    }
    Ok(count)
}

pub fn is_jpeg_file(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext_lower = ext.to_lowercase();
            SUPPORTED_JPEG_EXTENSIONS.contains(&ext_lower.as_str())
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use std::time::Duration;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str, modified: SystemTime) {
        let file = File::create(dir.join(name)).unwrap();
        file.set_modified(modified).unwrap();
    }

    #[test]
    fn test_is_jpeg_file() {
        assert!(is_jpeg_file(Path::new("a.jpg")));
        assert!(is_jpeg_file(Path::new("a.JPG")));
        assert!(is_jpeg_file(Path::new("a.jpeg")));
        assert!(is_jpeg_file(Path::new("a.Jpeg")));

        assert!(!is_jpeg_file(Path::new("a.png")));
        assert!(!is_jpeg_file(Path::new("a.jpg.txt")));
        assert!(!is_jpeg_file(Path::new("jpg")));
        assert!(!is_jpeg_file(Path::new("a")));
    }

    #[test]
    fn test_scan_filters_extensions_case_insensitively() {
        let temp_dir = TempDir::new().unwrap();
        let now = SystemTime::now();
        for name in ["a.jpg", "b.JPG", "c.jpeg", "d.Jpeg", "e.png", "f.txt", "g.json"] {
            touch(temp_dir.path(), name, now);
        }

        let files = scan_directory(temp_dir.path()).unwrap();
        let names: Vec<_> = files.iter().map(|f| f.filename.as_str()).collect();
        assert_eq!(names, vec!["a.jpg", "b.JPG", "c.jpeg", "d.Jpeg"]);
        assert!(files.iter().all(|f| f.path.is_absolute()));
    }

    #[test]
    fn test_scan_ignores_directories() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("nested.jpg")).unwrap();
        touch(temp_dir.path(), "a.jpg", SystemTime::now());

        let files = scan_directory(temp_dir.path()).unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].filename, "a.jpg");
    }

    #[test]
    fn test_scan_does_not_recurse() {
        let temp_dir = TempDir::new().unwrap();
        let subdir = temp_dir.path().join("subdir");
        fs::create_dir(&subdir).unwrap();
        touch(&subdir, "deep.jpg", SystemTime::now());

        let files = scan_directory(temp_dir.path()).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_scan_sorts_by_mtime_then_filename() {
        let temp_dir = TempDir::new().unwrap();
        let older = SystemTime::UNIX_EPOCH + Duration::from_secs(1_704_067_200); // 2024-01-01
        let newer = SystemTime::UNIX_EPOCH + Duration::from_secs(1_717_200_000); // 2024-06-01

        touch(temp_dir.path(), "c.jpg", newer);
        touch(temp_dir.path(), "b.jpg", older);
        touch(temp_dir.path(), "a.jpg", older);

        let files = scan_directory(temp_dir.path()).unwrap();
        let names: Vec<_> = files.iter().map(|f| f.filename.as_str()).collect();
        assert_eq!(names, vec!["a.jpg", "b.jpg", "c.jpg"]);
    }

    #[test]
    fn test_scan_empty_directory() {
        let temp_dir = TempDir::new().unwrap();
        touch(temp_dir.path(), "notes.txt", SystemTime::now());

        let files = scan_directory(temp_dir.path()).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_scan_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let result = scan_directory(&temp_dir.path().join("missing"));
        assert!(result.is_err());
    }

    #[test]
    fn test_count_files_counts_all_extensions() {
        let temp_dir = TempDir::new().unwrap();
        let now = SystemTime::now();
        for name in ["a.jpg", "b.png", "c.txt"] {
            touch(temp_dir.path(), name, now);
        }
        fs::create_dir(temp_dir.path().join("subdir")).unwrap();

        assert_eq!(count_files(temp_dir.path()).unwrap(), 3);
    }
}
