use crate::blog::{Post, PostIndex};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the manifest file inside a posts directory.
pub const MANIFEST_FILE: &str = "posts.json";

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid post manifest {path}: {source}")]
    Manifest {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Invalid posts directory: {0}")]
    InvalidPostsDir(PathBuf),
}

/// Read a source file and return its content
pub fn read_source(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Read the body of a post listed in the manifest
pub fn read_post(posts_root: &Path, post: &Post) -> Result<String, IoError> {
    read_source(&posts_root.join(&post.file))
}

/// Load and sort the `posts.json` manifest of a posts directory
pub fn load_post_index(posts_root: &Path) -> Result<PostIndex, IoError> {
    validate_posts_dir(posts_root)?;

    let path = posts_root.join(MANIFEST_FILE);
    let json = read_source(&path)?;
    let index = PostIndex::from_json(&json).map_err(|source| IoError::Manifest {
        path: path.clone(),
        source,
    })?;

    log::debug!(
        "Loaded {} post(s) from {}",
        index.posts().len(),
        path.display()
    );
    Ok(index)
}

/// Write an HTML fragment, creating parent directories as needed
pub fn write_fragment(path: &Path, html: &str) -> Result<(), IoError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(path, html).map_err(IoError::Io)
}

pub fn validate_posts_dir(path: &Path) -> Result<(), IoError> {
    if !path.is_dir() {
        return Err(IoError::InvalidPostsDir(path.to_path_buf()));
    }

    Ok(())
}
