use std::{fs, path::Path};

use crate::{domain::Content, error::ContentError};

/// Reads a content file, parses it as TOML and validates the result.
pub fn load_content(path: &Path) -> Result<Content, ContentError> {
    let raw = fs::read_to_string(path).map_err(|source| ContentError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let content: Content = toml::from_str(&raw).map_err(|source| ContentError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    content.validate()?;
    Ok(content)
}
