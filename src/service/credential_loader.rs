use crate::error::SyncError;
use std::{fs, path::Path};

/// Read a credential file verbatim. The content is opaque text to this tool:
/// it is expected to be a service-account JSON document, but nothing here
/// parses or validates it.
pub fn load_file(path: &Path) -> Result<String, SyncError> {
    Ok(fs::read_to_string(path)?)
}

#[cfg(test)]
mod tests {
    use super::load_file;
    use crate::error::SyncError;
    use std::path::Path;

    #[test]
    fn missing_file_surfaces_io_error() {
        let err = load_file(Path::new("/nonexistent/credsync-no-such-file.json"))
            .expect_err("expected a load failure");
        match err {
            SyncError::Io(e) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn reads_content_verbatim() {
        let mut path = std::env::temp_dir();
        path.push(format!("credsync-loader-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"a":1}"#).expect("failed to write temp file");

        let blob = load_file(&path).expect("failed to load temp file");
        assert_eq!(blob, r#"{"a":1}"#);

        let _ = std::fs::remove_file(&path);
    }
}
