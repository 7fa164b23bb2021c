//! Directory enumeration for the listing routes. Nothing here is cached.

use crate::paths::Base;
use std::io::ErrorKind;
use std::path::Path;
use walkdir::WalkDir;

pub const PAGE_EXTENSION: &str = "md";
pub const SCRIPT_EXTENSIONS: &[&str] = &["py", "rs", "sh"];
pub const CONFIG_EXTENSIONS: &[&str] = &["yaml", "yml", "json"];

/// A listed file: its path relative to the base root, with `/` separators.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileReference {
    pub base: Base,
    pub path: String,
}

impl FileReference {
    pub fn raw_href(&self) -> String {
        format!(
            "/raw?base={}&path={}",
            urlencoding::encode(self.base.id()),
            urlencoding::encode(&self.path)
        )
    }

    pub fn page_href(&self) -> String {
        format!("/page?name={}", urlencoding::encode(&self.path))
    }
}

/// Markdown files directly under `dir`, sorted by name. A missing directory
/// (or a path that is not a directory) lists nothing.
pub async fn list_pages(dir: &Path) -> std::io::Result<Vec<FileReference>> {
    let mut entries = match tokio::fs::read_dir(dir).await {
        Ok(entries) => entries,
        Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory) => {
            return Ok(Vec::new());
        }
        Err(e) => return Err(e),
    };
    let root = tokio::fs::canonicalize(dir).await?;

    let mut pages = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if !has_extension(&path, &[PAGE_EXTENSION]) {
            continue;
        }
        let file_type = entry.file_type().await?;
        let listable = file_type.is_file()
            || (file_type.is_symlink() && link_stays_inside(&path, &root).await);
        if listable && let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            pages.push(FileReference {
                base: Base::Docs,
                path: name.to_string(),
            });
        }
    }
    pages.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(pages)
}

/// Files under `root` (recursively) with one of `extensions`, sorted by path.
///
/// Symlinked files are listed when their target is a regular file inside
/// `root`, matching what `/raw` will serve. Symlinked directories are not
/// descended into.
pub fn list_files(root: &Path, base: Base, extensions: &[&str]) -> Vec<FileReference> {
    let Ok(canonical_root) = std::fs::canonicalize(root) else {
        return Vec::new();
    };

    let mut files: Vec<FileReference> = WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::debug!("Skipping unreadable entry under {:?}: {}", root, e);
                None
            }
        })
        .filter(|entry| has_extension(entry.path(), extensions))
        .filter(|entry| {
            let file_type = entry.file_type();
            file_type.is_file()
                || (file_type.is_symlink()
                    && std::fs::canonicalize(entry.path()).is_ok_and(|target| {
                        target.starts_with(&canonical_root) && target.is_file()
                    }))
        })
        .filter_map(|entry| {
            let relative = entry.path().strip_prefix(root).ok()?;
            let parts: Vec<_> = relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect();
            Some(FileReference {
                base,
                path: parts.join("/"),
            })
        })
        .collect();
    files.sort_by(|a, b| a.path.cmp(&b.path));
    files
}

async fn link_stays_inside(path: &Path, root: &Path) -> bool {
    match tokio::fs::canonicalize(path).await {
        Ok(target) => {
            target.starts_with(root)
                && tokio::fs::metadata(&target).await.is_ok_and(|m| m.is_file())
        }
        Err(_) => false,
    }
}

fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.iter().any(|x| x.eq_ignore_ascii_case(ext)))
}
