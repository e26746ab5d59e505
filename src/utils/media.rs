use std::path::{Path, PathBuf};
use tokio::{fs, io};
use uuid::Uuid;

/// Keeps the characters of an uploaded file name that are safe in a path.
pub fn sanitize_filename(filename: &str) -> String {
    let name = filename.rsplit(['/', '\\']).next().unwrap_or_default();

    name.chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'))
        .collect::<String>()
        .trim_start_matches('.')
        .to_owned()
}

/// Longest file name kept in a stored path. The unique prefix comes on top.
const MAX_STORED_NAME: usize = 128;
/// Longest extension kept when a name is shortened.
const MAX_EXTENSION: usize = 16;

/// Cuts a sanitized name down to [`MAX_STORED_NAME`] bytes, keeping a short
/// extension.
fn shorten_filename(name: String) -> String {
    if name.len() <= MAX_STORED_NAME {
        return name;
    }

    let extension = match name.rfind('.') {
        Some(dot) if name.len() - dot <= MAX_EXTENSION => &name[dot..],
        _ => "",
    };

    format!("{}{extension}", &name[..MAX_STORED_NAME - extension.len()])
}

/// Writes an upload below `media_root/upload_to` and returns its path relative
/// to `media_root`.
pub async fn store_upload(
    media_root: &Path,
    upload_to: &str,
    filename: &str,
    contents: &[u8],
) -> io::Result<String> {
    let name = shorten_filename(sanitize_filename(filename));
    let relative = format!("{upload_to}/{}-{name}", Uuid::new_v4());
    let path = media_root.join(&relative);

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await?;
    }
    fs::write(&path, contents).await?;

    debug!(path = %path.display(), size = contents.len(), "stored upload");

    Ok(relative)
}

/// Removes stored uploads, see [`remove_upload`].
pub async fn remove_uploads<I>(media_root: &Path, files: I)
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    for file in files {
        remove_upload(media_root, file.as_ref()).await;
    }
}

/// Removes a stored upload. A missing file is not an error.
pub async fn remove_upload(media_root: &Path, relative: &str) {
    let path: PathBuf = media_root.join(relative);

    match fs::remove_file(&path).await {
        Ok(()) => {}
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => warn!(path = %path.display(), "failed to remove upload: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_strips_directories_and_odd_characters() {
        assert_eq!(sanitize_filename("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_filename("C:\\tmp\\sol ution.cpp"), "solution.cpp");
        assert_eq!(sanitize_filename("..hidden"), "hidden");
        assert_eq!(sanitize_filename("a$b%c.txt"), "abc.txt");
    }

    #[test]
    fn long_names_keep_their_extension() {
        let short = shorten_filename("main.cpp".to_owned());
        assert_eq!(short, "main.cpp");

        let long = shorten_filename(format!("{}.txt", "a".repeat(300)));
        assert_eq!(long.len(), MAX_STORED_NAME);
        assert!(long.ends_with("a.txt"));

        let odd = shorten_filename(format!("x.{}", "b".repeat(300)));
        assert_eq!(odd.len(), MAX_STORED_NAME);
        assert!(odd.starts_with("x.b"));
    }

    #[tokio::test]
    async fn stored_name_fits_in_a_path_component() {
        let root = std::env::temp_dir().join(format!("oj-media-{}", Uuid::new_v4()));

        let relative = store_upload(&root, "attachments", &"n".repeat(255), b"data")
            .await
            .unwrap();
        let component = relative.rsplit('/').next().unwrap();
        assert!(component.len() <= 255);
        assert!(root.join(&relative).is_file());

        remove_uploads(&root, [&relative]).await;
        assert!(!root.join(&relative).exists());

        fs::remove_dir_all(&root).await.unwrap();
    }
}
