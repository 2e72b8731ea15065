use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::models::FileMetadata;
use crate::utils::{modified_time_rfc3339, sha256_file};

/// Size ceiling for accepted files. The bound is exclusive: a file of
/// exactly this many bytes still passes.
pub const MAX_FILE_SIZE: u64 = 5 * 1024 * 1024;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UploadError {
    #[error("No file selected.")]
    NoFileSelected,
    #[error("Invalid file type. Only PDF, JPEG, and PNG are allowed.")]
    UnsupportedType,
    #[error("File size exceeds 5MB limit.")]
    FileTooLarge,
}

/// An accepted file held by the session. Only the metadata is ever
/// persisted; the file itself stays where it was selected from.
#[derive(Debug, Clone)]
pub struct Attachment {
    path: PathBuf,
    metadata: FileMetadata,
    fingerprint: String,
    modified_at: String,
}

impl Attachment {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn metadata(&self) -> &FileMetadata {
        &self.metadata
    }

    /// Whether the file changed on disk since it was accepted. Advisory
    /// only; an unreadable file counts as changed.
    pub fn is_stale(&self) -> bool {
        let modified_at = match modified_time_rfc3339(&self.path) {
            Ok(value) => value,
            Err(_) => return true,
        };
        let fingerprint = match sha256_file(&self.path) {
            Ok(value) => value,
            Err(_) => return true,
        };
        fingerprint != self.fingerprint || modified_at != self.modified_at
    }
}

/// Gate checks in order: selection presence, file type, size ceiling.
/// The first failing check decides the error; later ones never run.
pub fn evaluate(selection: &str) -> Result<Attachment, UploadError> {
    let trimmed = selection.trim();
    if trimmed.is_empty() {
        return Err(UploadError::NoFileSelected);
    }

    let path = Path::new(trimmed);
    let file_info = match fs::metadata(path) {
        Ok(info) if info.is_file() => info,
        _ => return Err(UploadError::NoFileSelected),
    };

    let mime_type = mime_from_extension(path).ok_or(UploadError::UnsupportedType)?;

    let size = file_info.len();
    if size > MAX_FILE_SIZE {
        return Err(UploadError::FileTooLarge);
    }

    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| trimmed.to_string());

    // a file vanishing between checks is the same as no selection
    let fingerprint = sha256_file(path).map_err(|_| UploadError::NoFileSelected)?;
    let modified_at = modified_time_rfc3339(path).map_err(|_| UploadError::NoFileSelected)?;

    Ok(Attachment {
        path: path.to_path_buf(),
        metadata: FileMetadata {
            name,
            size,
            mime_type: mime_type.to_string(),
        },
        fingerprint,
        modified_at,
    })
}

fn mime_from_extension(path: &Path) -> Option<&'static str> {
    let extension = path.extension().and_then(|ext| ext.to_str())?;
    if extension.eq_ignore_ascii_case("pdf") {
        Some("application/pdf")
    } else if extension.eq_ignore_ascii_case("jpg") || extension.eq_ignore_ascii_case("jpeg") {
        Some("image/jpeg")
    } else if extension.eq_ignore_ascii_case("png") {
        Some("image/png")
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, content: &[u8]) -> String {
        let path = dir.path().join(name);
        fs::write(&path, content).expect("write test file");
        path.to_string_lossy().to_string()
    }

    #[test]
    fn accepts_the_three_allowed_types() {
        let dir = TempDir::new().expect("temp dir");
        let cases = [
            ("invoice.pdf", "application/pdf"),
            ("scan.jpg", "image/jpeg"),
            ("scan.jpeg", "image/jpeg"),
            ("photo.png", "image/png"),
        ];

        for (name, expected_mime) in cases {
            let path = write_file(&dir, name, b"content");
            let attachment = evaluate(&path).expect("accepted");
            assert_eq!(attachment.metadata().mime_type, expected_mime);
            assert_eq!(attachment.metadata().name, name);
            assert_eq!(attachment.metadata().size, 7);
        }
    }

    #[test]
    fn extension_matching_ignores_case() {
        let dir = TempDir::new().expect("temp dir");
        let path = write_file(&dir, "INVOICE.PDF", b"content");

        let attachment = evaluate(&path).expect("accepted");
        assert_eq!(attachment.metadata().mime_type, "application/pdf");
    }

    #[test]
    fn rejects_other_extensions() {
        let dir = TempDir::new().expect("temp dir");
        let text = write_file(&dir, "notes.txt", b"content");
        let bare = write_file(&dir, "noextension", b"content");

        assert_eq!(evaluate(&text).unwrap_err(), UploadError::UnsupportedType);
        assert_eq!(evaluate(&bare).unwrap_err(), UploadError::UnsupportedType);
    }

    #[test]
    fn blank_selection_is_no_file() {
        assert_eq!(evaluate("").unwrap_err(), UploadError::NoFileSelected);
        assert_eq!(evaluate("   ").unwrap_err(), UploadError::NoFileSelected);
    }

    #[test]
    fn missing_path_is_no_file() {
        assert_eq!(
            evaluate("/nowhere/really/invoice.pdf").unwrap_err(),
            UploadError::NoFileSelected
        );
    }

    #[test]
    fn directory_selection_is_no_file() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().to_string_lossy().to_string();
        assert_eq!(evaluate(&path).unwrap_err(), UploadError::NoFileSelected);
    }

    #[test]
    fn type_check_runs_before_size_check() {
        let dir = TempDir::new().expect("temp dir");
        let oversized = vec![0u8; (MAX_FILE_SIZE + 1) as usize];
        let path = write_file(&dir, "huge.txt", &oversized);

        assert_eq!(evaluate(&path).unwrap_err(), UploadError::UnsupportedType);
    }

    #[test]
    fn size_at_the_limit_is_accepted() {
        let dir = TempDir::new().expect("temp dir");
        let exact = vec![0u8; MAX_FILE_SIZE as usize];
        let path = write_file(&dir, "limit.png", &exact);

        let attachment = evaluate(&path).expect("accepted");
        assert_eq!(attachment.metadata().size, MAX_FILE_SIZE);
    }

    #[test]
    fn size_one_byte_over_is_rejected() {
        let dir = TempDir::new().expect("temp dir");
        let oversized = vec![0u8; (MAX_FILE_SIZE + 1) as usize];
        let path = write_file(&dir, "over.png", &oversized);

        assert_eq!(evaluate(&path).unwrap_err(), UploadError::FileTooLarge);
    }

    #[test]
    fn fresh_attachment_is_not_stale() {
        let dir = TempDir::new().expect("temp dir");
        let path = write_file(&dir, "invoice.pdf", b"original");

        let attachment = evaluate(&path).expect("accepted");
        assert!(!attachment.is_stale());
    }

    #[test]
    fn rewriting_the_file_makes_the_attachment_stale() {
        let dir = TempDir::new().expect("temp dir");
        let path = write_file(&dir, "invoice.pdf", b"original");

        let attachment = evaluate(&path).expect("accepted");
        fs::write(&path, b"replaced content").expect("rewrite");
        assert!(attachment.is_stale());
    }

    #[test]
    fn deleting_the_file_makes_the_attachment_stale() {
        let dir = TempDir::new().expect("temp dir");
        let path = write_file(&dir, "invoice.pdf", b"original");

        let attachment = evaluate(&path).expect("accepted");
        fs::remove_file(&path).expect("remove");
        assert!(attachment.is_stale());
    }

    #[test]
    fn gate_errors_carry_the_exact_user_texts() {
        assert_eq!(UploadError::NoFileSelected.to_string(), "No file selected.");
        assert_eq!(
            UploadError::UnsupportedType.to_string(),
            "Invalid file type. Only PDF, JPEG, and PNG are allowed."
        );
        assert_eq!(
            UploadError::FileTooLarge.to_string(),
            "File size exceeds 5MB limit."
        );
    }
}
