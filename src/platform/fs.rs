// LogMonitor - platform/fs.rs
//
// Filesystem access for the monitored file: open for reading, truncate on
// clear. Errors are mapped into `FileError` with the path attached.

use crate::util::error::FileError;
use std::fs::{File, OpenOptions};
use std::io::BufReader;
use std::path::Path;

/// Open `path` for buffered reading.
pub fn open_for_read(path: &Path) -> Result<BufReader<File>, FileError> {
    let file = File::open(path).map_err(|source| FileError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

/// Truncate `path` to zero length.
///
/// The file must already exist; a missing file is an error rather than being
/// created empty.
pub fn truncate_file(path: &Path) -> Result<(), FileError> {
    OpenOptions::new()
        .write(true)
        .truncate(true)
        .open(path)
        .map(|_| ())
        .map_err(|source| FileError::Truncate {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    #[test]
    fn test_truncate_empties_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.log");
        std::fs::write(&path, "one\ntwo\n").unwrap();

        truncate_file(&path).unwrap();
        assert_eq!(std::fs::metadata(&path).unwrap().len(), 0);
    }

    #[test]
    fn test_truncate_missing_file_does_not_create_it() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.log");

        let err = truncate_file(&path).unwrap_err();
        assert!(matches!(err, FileError::Truncate { .. }));
        assert!(!path.exists());
    }

    #[test]
    fn test_open_for_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.log");
        std::fs::write(&path, "hello").unwrap();

        let mut text = String::new();
        open_for_read(&path).unwrap().read_to_string(&mut text).unwrap();
        assert_eq!(text, "hello");

        let err = open_for_read(&dir.path().join("nope.log")).unwrap_err();
        assert!(matches!(err, FileError::Open { .. }));
        assert_eq!(err.path(), dir.path().join("nope.log"));
    }
}
