use std::path::PathBuf;
use thiserror::Error;

/// Bulk-load script generation errors
#[derive(Error, Debug)]
pub enum LoadScriptError {
    /// Template rendering failed
    #[error("Template rendering failed: {0}")]
    Template(#[from] handlebars::RenderError),

    #[error("Failed to write load script '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LoadScriptError {
    pub fn error_code(&self) -> &'static str {
        match self {
            LoadScriptError::Template(_) => "TEMPLATE_ERROR",
            LoadScriptError::Write { .. } => "LOAD_SCRIPT_WRITE_FAILED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_error() {
        let err = LoadScriptError::Write {
            path: PathBuf::from("out/edges.cypher"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "permission denied"),
        };
        assert_eq!(
            err.to_string(),
            "Failed to write load script 'out/edges.cypher': permission denied"
        );
        assert_eq!(err.error_code(), "LOAD_SCRIPT_WRITE_FAILED");
    }
}
