use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::PlanError;

/// ## Structure
/// A plan describes one conversion run.
///
/// ```text
/// Plan
///   ├── meta: Option<Meta>
///   │   └── name: Option<String>
///   ├── convert: ConvertProfile
///   │   ├── input: PathBuf
///   │   └── output: PathBuf
///   └── load_script: Option<LoadScriptProfile>
///       ├── output: PathBuf
///       └── csv_url: Option<String>
/// ```

pub const DEFAULT_INPUT: &str = "./tests/mytest.vfg";
pub const DEFAULT_OUTPUT: &str = "./cfl_edges.txt";

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Meta {
    pub name: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Plan {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
    #[serde(default)]
    pub convert: ConvertProfile,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub load_script: Option<LoadScriptProfile>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ConvertProfile {
    #[serde(default = "default_input")]
    pub input: PathBuf,
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

impl Default for ConvertProfile {
    fn default() -> Self {
        Self {
            input: default_input(),
            output: default_output(),
        }
    }
}

fn default_input() -> PathBuf {
    PathBuf::from(DEFAULT_INPUT)
}

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT)
}

/// Where to write the bulk-load script, and the URL the database should read
/// the CSV from. Without a `csv_url` the script points at
/// `file:///<csv file name>`, which is where the import directory of a local
/// database expects it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LoadScriptProfile {
    pub output: PathBuf,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub csv_url: Option<String>,
}

impl Plan {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, PlanError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| PlanError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content).map_err(|source| PlanError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    pub fn to_yaml(&self) -> Result<String, PlanError> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn name(&self) -> &str {
        self.meta
            .as_ref()
            .and_then(|meta| meta.name.as_deref())
            .unwrap_or("Unnamed conversion")
    }

    /// Make every relative path in the plan relative to `base` instead
    pub fn resolve_paths(&mut self, base: &Path) {
        self.convert.input = resolve(base, &self.convert.input);
        self.convert.output = resolve(base, &self.convert.output);
        if let Some(load_script) = self.load_script.as_mut() {
            load_script.output = resolve(base, &load_script.output);
        }
    }
}

fn resolve(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
