use std::path::PathBuf;
use thiserror::Error;

/// Plan file errors
#[derive(Error, Debug)]
pub enum PlanError {
    #[error("Failed to read plan '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid plan '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Failed to serialize plan: {0}")]
    Serialize(#[from] serde_yaml::Error),

    #[error("Plan file '{}' has no parent directory", .0.display())]
    NoParentDirectory(PathBuf),
}

impl PlanError {
    pub fn error_code(&self) -> &'static str {
        match self {
            PlanError::Read { .. } => "PLAN_READ_FAILED",
            PlanError::Parse { .. } => "PLAN_INVALID",
            PlanError::Serialize(_) => "PLAN_SERIALIZE_FAILED",
            PlanError::NoParentDirectory(_) => "PLAN_NO_PARENT",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_parent_directory() {
        let err = PlanError::NoParentDirectory(PathBuf::from(""));
        assert_eq!(err.to_string(), "Plan file '' has no parent directory");
        assert_eq!(err.error_code(), "PLAN_NO_PARENT");
    }

    #[test]
    fn test_parse_error_code() {
        let source = serde_yaml::from_str::<u32>("not a number").unwrap_err();
        let err = PlanError::Parse {
            path: PathBuf::from("plan.yaml"),
            source,
        };
        assert!(err.to_string().starts_with("Invalid plan 'plan.yaml'"));
        assert_eq!(err.error_code(), "PLAN_INVALID");
    }
}
