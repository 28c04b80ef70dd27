// LogSage - app/upload.rs
//
// Upload boundary: extension check, size cap, read, UTF-8 decode.
// Everything past this point can assume well-formed text; the core layers
// never see raw bytes.

use crate::core::model::LogDocument;
use crate::util::constants::{ALLOWED_EXTENSIONS, MAX_UPLOAD_BYTES};
use crate::util::error::UploadError;
use std::path::Path;

/// Load a log file into a decoded `LogDocument`.
///
/// Validates the extension against the accepted set, enforces the size cap
/// before reading, and decodes strictly as UTF-8. Any failure is surfaced
/// here; the core never sees an invalid document.
pub fn load_log_document(path: &Path) -> Result<LogDocument, UploadError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    if !ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
        return Err(UploadError::UnsupportedExtension {
            path: path.to_path_buf(),
            extension,
        });
    }

    let metadata = std::fs::metadata(path).map_err(|e| UploadError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    if metadata.len() > MAX_UPLOAD_BYTES {
        return Err(UploadError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size: MAX_UPLOAD_BYTES,
        });
    }

    let bytes = std::fs::read(path).map_err(|e| UploadError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let text = String::from_utf8(bytes).map_err(|e| UploadError::InvalidEncoding {
        path: path.to_path_buf(),
        source: e,
    })?;

    tracing::info!(
        file = %path.display(),
        bytes = metadata.len(),
        "Log file loaded"
    );

    Ok(LogDocument {
        path: path.to_path_buf(),
        text,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(dir: &tempfile::TempDir, name: &str, bytes: &[u8]) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(bytes).unwrap();
        path
    }

    #[test]
    fn test_loads_valid_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, "app.log", b"INFO start\nERROR disk full\n");
        let doc = load_log_document(&path).unwrap();
        assert_eq!(doc.text, "INFO start\nERROR disk full\n");
        assert_eq!(doc.display_name(), "app.log");
    }

    #[test]
    fn test_extension_check_is_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, "app.LOG", b"fine\n");
        assert!(load_log_document(&path).is_ok());
    }

    #[test]
    fn test_rejects_unsupported_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, "app.exe", b"whatever");
        let result = load_log_document(&path);
        assert!(matches!(
            result,
            Err(UploadError::UnsupportedExtension { .. })
        ));
    }

    #[test]
    fn test_rejects_missing_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, "logfile", b"whatever");
        assert!(matches!(
            load_log_document(&path),
            Err(UploadError::UnsupportedExtension { .. })
        ));
    }

    #[test]
    fn test_rejects_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, "bad.log", &[0xff, 0xfe, 0x00, 0x41]);
        assert!(matches!(
            load_log_document(&path),
            Err(UploadError::InvalidEncoding { .. })
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.log");
        assert!(matches!(
            load_log_document(&path),
            Err(UploadError::Io { .. })
        ));
    }
}
