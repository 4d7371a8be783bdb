use actix_multipart::form::tempfile::TempFile;
use std::io::Read;
use std::path::Path;

pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("File too large. Maximum size is 5MB.")]
    TooLarge,
    #[error("Empty file")]
    Empty,
    #[error("File content does not match an allowed image type.")]
    NotAnImage,
    #[error("Failed to save file")]
    Io(#[from] std::io::Error),
}

/// Maps the leading magic bytes to a file extension.
/// Content sniffing, not the client-supplied content type, decides.
fn image_extension(bytes: &[u8]) -> Option<&'static str> {
    if bytes.len() < 4 {
        return None;
    }
    match bytes {
        [0xFF, 0xD8, 0xFF, ..] => Some("jpg"),
        [0x89, 0x50, 0x4E, 0x47, ..] => Some("png"),
        [0x47, 0x49, 0x46, 0x38, ..] => Some("gif"),
        [0x52, 0x49, 0x46, 0x46, _, _, _, _, 0x57, 0x45, 0x42, 0x50, ..] => Some("webp"),
        _ => None,
    }
}

/// Persists an uploaded image under `uploads_dir` with a fresh uuid name
/// and returns the public `/uploads/...` path stored in the database.
pub fn store_image(uploads_dir: &str, file: &TempFile) -> Result<String, UploadError> {
    if file.size == 0 {
        return Err(UploadError::Empty);
    }
    if file.size > MAX_IMAGE_BYTES {
        return Err(UploadError::TooLarge);
    }

    let mut head = [0u8; 16];
    let mut source = std::fs::File::open(file.file.path())?;
    let read = source.read(&mut head)?;
    let ext = image_extension(&head[..read]).ok_or(UploadError::NotAnImage)?;

    std::fs::create_dir_all(uploads_dir)?;
    let filename = format!("{}.{}", uuid::Uuid::new_v4(), ext);
    std::fs::copy(file.file.path(), Path::new(uploads_dir).join(&filename))?;

    Ok(format!("/uploads/{}", filename))
}

/// Unlinks a previously stored image. Callers treat failure as best-effort.
pub fn remove_image(uploads_dir: &str, stored_path: &str) -> std::io::Result<()> {
    let filename = stored_path.trim_start_matches("/uploads/");
    // stored paths are generated server side; refuse anything that walks out
    if filename.contains("..") || filename.contains('/') {
        return Ok(());
    }
    std::fs::remove_file(Path::new(uploads_dir).join(filename))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_image_magic_bytes() {
        assert_eq!(image_extension(&[0xFF, 0xD8, 0xFF, 0xE0]), Some("jpg"));
        assert_eq!(image_extension(&[0x89, 0x50, 0x4E, 0x47, 0x0D]), Some("png"));
        assert_eq!(image_extension(&[0x47, 0x49, 0x46, 0x38, 0x39]), Some("gif"));
        assert_eq!(
            image_extension(&[
                0x52, 0x49, 0x46, 0x46, 0x00, 0x00, 0x00, 0x00, 0x57, 0x45, 0x42, 0x50
            ]),
            Some("webp")
        );
        assert_eq!(image_extension(b"<html>haha</html>"), None);
        assert_eq!(image_extension(&[0xFF]), None);
    }

    #[test]
    fn remove_image_refuses_traversal() {
        // must not touch anything outside the uploads dir
        assert!(remove_image("uploads", "/uploads/../etc/passwd").is_ok());
        assert!(remove_image("uploads", "/uploads/a/b.png").is_ok());
    }
}
