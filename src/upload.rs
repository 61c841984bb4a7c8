use std::path::Path;

use crate::error::SiteError;

/// Image extensions accepted for gallery uploads.
pub const ALLOWED_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "gif", "webp"];

/// Check the extension after the final dot, case-insensitively. Names
/// without a dot are rejected.
pub fn allowed_file(filename: &str) -> bool {
    match filename.rsplit_once('.') {
        Some((_, ext)) => ALLOWED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()),
        None => false,
    }
}

/// Reduce an untrusted client filename to something safe to create inside
/// the upload directory. Path separators and their components are dropped,
/// whitespace becomes `_`, anything outside ASCII `[A-Za-z0-9._-]` is
/// removed, and leading dots and dashes are stripped. A name with nothing
/// left becomes `upload`.
pub fn sanitize_filename(name: &str) -> String {
    let last = name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default();

    let mut cleaned = String::with_capacity(last.len());
    for ch in last.chars() {
        if ch.is_ascii_alphanumeric() || matches!(ch, '.' | '-' | '_') {
            cleaned.push(ch);
        } else if ch.is_whitespace() {
            cleaned.push('_');
        }
    }

    let trimmed = cleaned.trim_start_matches(['.', '-']);
    if trimmed.is_empty() {
        "upload".to_owned()
    } else {
        trimmed.to_owned()
    }
}

fn split_stem(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(idx) if idx > 0 => name.split_at(idx),
        _ => (name, ""),
    }
}

/// Write `bytes` into `dir` under a sanitized version of `original`,
/// suffixing `_1`, `_2`, ... until an unused name is found. Returns the
/// filename actually used.
///
/// The existence probe and the write are separate steps, so two concurrent
/// uploads of the same name can settle on the same path; the later write
/// wins.
pub async fn store_upload(dir: &Path, original: &str, bytes: &[u8]) -> Result<String, SiteError> {
    let safe = sanitize_filename(original);
    let (stem, ext) = split_stem(&safe);

    let mut filename = safe.clone();
    let mut counter = 1u32;
    while tokio::fs::try_exists(dir.join(&filename)).await? {
        filename = format!("{stem}_{counter}{ext}");
        counter += 1;
    }

    tokio::fs::write(dir.join(&filename), bytes).await?;
    Ok(filename)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allowed_file_checks_final_extension() {
        assert!(allowed_file("latte.png"));
        assert!(allowed_file("LATTE.JPG"));
        assert!(allowed_file("archive.tar.webp"));
        assert!(!allowed_file("notes.txt"));
        assert!(!allowed_file("no-extension"));
        assert!(!allowed_file("trailing-dot."));
    }

    #[test]
    fn sanitize_drops_directories_and_strange_characters() {
        assert_eq!(sanitize_filename("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_filename("c:\\temp\\shot.png"), "shot.png");
        assert_eq!(sanitize_filename("my photo (1).png"), "my_photo_1.png");
        assert_eq!(sanitize_filename("café.png"), "caf.png");
        assert_eq!(sanitize_filename(".hidden.png"), "hidden.png");
    }

    #[test]
    fn sanitize_never_returns_empty() {
        assert_eq!(sanitize_filename("¡¡¡"), "upload");
        assert_eq!(sanitize_filename("..."), "upload");
        assert_eq!(sanitize_filename(""), "upload");
    }

    #[tokio::test]
    async fn store_upload_suffixes_on_collision() {
        let dir = tempfile::tempdir().expect("create temp dir");

        let first = store_upload(dir.path(), "shot.png", b"one").await.expect("first write");
        let second = store_upload(dir.path(), "shot.png", b"two").await.expect("second write");
        let third = store_upload(dir.path(), "shot.png", b"three").await.expect("third write");

        assert_eq!(first, "shot.png");
        assert_eq!(second, "shot_1.png");
        assert_eq!(third, "shot_2.png");
        assert_eq!(
            std::fs::read(dir.path().join("shot_2.png")).expect("read third file"),
            b"three"
        );
    }

    #[tokio::test]
    async fn store_upload_keeps_extension_on_suffix() {
        let dir = tempfile::tempdir().expect("create temp dir");

        store_upload(dir.path(), "a b.jpeg", b"x").await.expect("first write");
        let renamed = store_upload(dir.path(), "a b.jpeg", b"y").await.expect("second write");

        assert_eq!(renamed, "a_b_1.jpeg");
    }
}
