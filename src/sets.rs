use crate::models::QuestionSet;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Folder paths are fixed at startup; there are no flags to override them.
pub const QUESTION_SET_DIR: &str = "question_sets";
pub const IMAGE_DIR: &str = "images";
pub const IMAGE_EXTENSION: &str = "jpg";

/// Discover the question-set documents in `dir`, sorted by path so every
/// run walks the survey in the same order.
pub fn get_set_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();

    if dir.exists()
        && dir.is_dir()
        && let Ok(entries) = fs::read_dir(dir)
    {
        for entry in entries.flatten() {
            if let Some(ext) = entry.path().extension()
                && ext == "json"
            {
                files.push(entry.path());
            }
        }
    }

    files.sort();
    files
}

/// A document that cannot be read or parsed ends the run; validity of the
/// input folder is assumed.
pub fn load_question_set(path: &Path) -> Result<QuestionSet> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading question set {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("parsing question set {}", path.display()))
}

/// Each document has one companion picture: same file stem, fixed image
/// extension, separate image directory.
pub fn image_path_for(image_dir: &Path, set_path: &Path) -> PathBuf {
    let stem = set_path.file_stem().unwrap_or_default();
    image_dir.join(stem).with_extension(IMAGE_EXTENSION)
}
