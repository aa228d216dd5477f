//! Local template loading from directories and single files.
//!
//! Directory sources list their top-level entries only (no recursion),
//! keep files with a markdown or text extension, and read each as strict
//! UTF-8. A file that cannot be read or decoded yields one error while
//! the rest of the directory continues to load.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::LoadError;
use crate::registry::load::LoadResult;
use crate::registry::source::SourceDescriptor;
use crate::registry::template::Template;

/// Extensions recognized as template files inside a directory source.
const TEMPLATE_EXTENSIONS: &[&str] = &["md", "markdown", "txt"];

/// Load every template file directly inside a directory.
pub fn load_directory(origin: &SourceDescriptor, dir: &Path) -> LoadResult {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            return LoadResult::failure(LoadError::new(
                &origin.raw,
                format!("Failed to list directory: {}", err),
            ))
        }
    };

    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .collect();
    paths.sort();

    let mut result = LoadResult::default();
    for path in paths {
        if !path.is_file() || !has_template_extension(&path) {
            continue;
        }
        match read_template(origin, &path) {
            Ok(template) => result.templates.push(template),
            Err(err) => result.errors.push(err),
        }
    }
    result
}

/// Load a single template file.
pub fn load_file(origin: &SourceDescriptor, path: &Path) -> LoadResult {
    if !path.is_file() {
        return LoadResult::failure(LoadError::new(
            &origin.raw,
            "Not a file or does not exist",
        ));
    }
    match read_template(origin, path) {
        Ok(template) => LoadResult::single(template),
        Err(err) => LoadResult::failure(err),
    }
}

fn has_template_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| TEMPLATE_EXTENSIONS.contains(&ext))
        .unwrap_or(false)
}

fn read_template(
    origin: &SourceDescriptor,
    path: &Path,
) -> std::result::Result<Template, LoadError> {
    let name = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .map(str::to_string)
        .ok_or_else(|| {
            LoadError::with_item(
                &origin.raw,
                path.display().to_string(),
                "File name is not valid UTF-8",
            )
        })?;

    let content = fs::read_to_string(path).map_err(|err| {
        LoadError::with_item(
            &origin.raw,
            path.display().to_string(),
            format!("Failed to read: {}", err),
        )
    })?;

    Ok(Template {
        name,
        content,
        origin: origin.raw.clone(),
    })
}
