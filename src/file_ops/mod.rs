// File operations: native dialogs plus reading imports and writing exports

use crate::serialize::ExportFormat;
use crate::theme::MAX_IMPORT_BYTES;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

// Asks for an export destination; None when the dialog is dismissed
pub async fn pick_save_path(file_name: &str, format: ExportFormat) -> Option<PathBuf> {
    rfd::AsyncFileDialog::new()
        .set_title(format!("Export {}", format))
        .set_file_name(file_name)
        .add_filter(format.mime(), &[format.extension()])
        .save_file()
        .await
        .map(|f| f.path().to_path_buf())
}

// Asks for a single theme file to import
pub async fn pick_import_path() -> Option<PathBuf> {
    rfd::AsyncFileDialog::new()
        .set_title("Import Theme")
        .add_filter("Theme JSON", &["json"])
        .pick_file()
        .await
        .map(|f| f.path().to_path_buf())
}

// Reads an import candidate; only regular .json files under the size limit are accepted
pub async fn read_theme_file(path: &Path) -> Result<String> {
    let is_json = path
        .extension()
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));
    if !is_json {
        anyhow::bail!("Only .json theme files can be imported: {}", path.display());
    }

    let metadata = tokio::fs::metadata(path)
        .await
        .with_context(|| format!("Failed to read: {}", path.display()))?;
    if !metadata.is_file() {
        anyhow::bail!("Not a file: {}", path.display());
    }
    if metadata.len() > MAX_IMPORT_BYTES {
        anyhow::bail!(
            "File too large (max {} KB): {}",
            MAX_IMPORT_BYTES / 1024,
            path.display()
        );
    }

    let text = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read: {}", path.display()))?;
    debug!(path = %path.display(), bytes = text.len(), "Theme file read");
    Ok(text)
}

// Writes export contents, replacing any existing file
pub async fn write_export(path: &Path, contents: &str) -> Result<PathBuf> {
    tokio::fs::write(path, contents)
        .await
        .with_context(|| format!("Failed to write: {}", path.display()))?;
    info!(path = %path.display(), "Export written");
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn writes_then_reads_back_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("default-theme.json");
        write_export(&path, "{\"id\":\"1\"}").await.unwrap();
        assert_eq!(read_theme_file(&path).await.unwrap(), "{\"id\":\"1\"}");
    }

    #[tokio::test]
    async fn rejects_non_json_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme.css");
        write_export(&path, ":root {}").await.unwrap();
        assert!(read_theme_file(&path).await.is_err());
    }

    #[tokio::test]
    async fn rejects_missing_and_oversized_files() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_theme_file(&dir.path().join("missing.json")).await.is_err());

        let big = dir.path().join("big.json");
        let padding = " ".repeat(MAX_IMPORT_BYTES as usize + 1);
        write_export(&big, &padding).await.unwrap();
        let err = read_theme_file(&big).await.unwrap_err();
        assert!(err.to_string().contains("too large"));
    }

    #[tokio::test]
    async fn rejects_directories() {
        let dir = tempfile::tempdir().unwrap();
        let sub = dir.path().join("folder.json");
        std::fs::create_dir(&sub).unwrap();
        assert!(read_theme_file(&sub).await.is_err());
    }
}
