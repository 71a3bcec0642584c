use serde_json::json;
use std::path::{Path, PathBuf};
use tracing::{error, info};

use super::BulkLoader;
use crate::common::write_string_to_file;
use crate::errors::LoadScriptError;
use crate::plan::LoadScriptProfile;

pub fn get_template() -> String {
    include_str!("to_cypher.hbs").to_string()
}

/// URL the database reads the CSV from when none is configured
pub fn default_csv_url(csv_path: &Path) -> String {
    let file_name = csv_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    format!("file:///{}", file_name)
}

/// Render the `LOAD CSV` script for the edge CSV at `csv_path`
pub fn render(name: &str, csv_path: &Path, csv_url: &str) -> Result<String, LoadScriptError> {
    let handlebars = crate::common::get_handlebars();
    let res = handlebars.render_template(
        &get_template(),
        &json!({
            "name": name,
            "csv_path": csv_path.display().to_string(),
            "csv_url": csv_url,
        }),
    )?;
    Ok(res)
}

/// Writes a Cypher bulk-load script next to the conversion output
#[derive(Debug, Clone)]
pub struct CypherScriptLoader {
    pub name: String,
    pub output: PathBuf,
    pub csv_url: Option<String>,
}

impl CypherScriptLoader {
    pub fn new(name: impl Into<String>, output: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            output: output.into(),
            csv_url: None,
        }
    }

    pub fn from_profile(name: impl Into<String>, profile: &LoadScriptProfile) -> Self {
        let loader = Self::new(name, profile.output.clone());
        match &profile.csv_url {
            Some(csv_url) => loader.with_csv_url(csv_url.clone()),
            None => loader,
        }
    }

    pub fn with_csv_url(mut self, csv_url: impl Into<String>) -> Self {
        self.csv_url = Some(csv_url.into());
        self
    }
}

impl BulkLoader for CypherScriptLoader {
    fn bulk_load(&self, csv_path: &Path) -> Result<(), LoadScriptError> {
        let csv_url = self
            .csv_url
            .clone()
            .unwrap_or_else(|| default_csv_url(csv_path));
        let script = render(&self.name, csv_path, &csv_url)?;

        write_string_to_file(&self.output, &script).map_err(|source| {
            error!(
                "Failed to write load script {}: {}",
                self.output.display(),
                source
            );
            LoadScriptError::Write {
                path: self.output.clone(),
                source,
            }
        })?;
        info!(
            "Bulk-load script for {} written to {}",
            csv_url,
            self.output.display()
        );
        Ok(())
    }
}
