use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read content file '{path}'")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse content file '{path}'")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("profile email is required")]
    MissingProfileEmail,
    #[error("project '{name}' has an empty id")]
    EmptyProjectId { name: String },
    #[error("duplicate project id '{id}'")]
    DuplicateProjectId { id: String },
    #[error("project '{id}' has an empty name")]
    EmptyProjectName { id: String },
}
