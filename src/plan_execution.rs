use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::converter::{self, ConversionSummary};
use crate::errors::{ConvertError, PlanError};
use crate::export::to_cypher::CypherScriptLoader;
use crate::export::BulkLoader;
use crate::plan::{LoadScriptProfile, Plan};

/// Command line paths that take precedence over the plan
#[derive(Debug, Clone, Default)]
pub struct RunOverrides {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub load_script: Option<PathBuf>,
}

impl RunOverrides {
    fn apply(&self, plan: &mut Plan) {
        if let Some(input) = &self.input {
            plan.convert.input = input.clone();
        }
        if let Some(output) = &self.output {
            plan.convert.output = output.clone();
        }
        if let Some(script) = &self.load_script {
            match plan.load_script.as_mut() {
                Some(profile) => profile.output = script.clone(),
                None => {
                    plan.load_script = Some(LoadScriptProfile {
                        output: script.clone(),
                        csv_url: None,
                    })
                }
            }
        }
    }
}

/// Load a plan file, resolve its paths against the plan's directory and run it
pub fn execute_plan(plan_file: &Path, overrides: &RunOverrides) -> Result<ConversionSummary> {
    info!("Loading plan: {}", plan_file.display());
    let mut plan = Plan::from_file(plan_file)?;
    let base = plan_file
        .parent()
        .ok_or_else(|| PlanError::NoParentDirectory(plan_file.to_path_buf()))?;
    plan.resolve_paths(base);
    overrides.apply(&mut plan);
    execute(&plan)
}

/// Run the default plan with paths relative to the working directory
pub fn execute_default(overrides: &RunOverrides) -> Result<ConversionSummary> {
    let mut plan = Plan::default();
    overrides.apply(&mut plan);
    execute(&plan)
}

/// Convert the edge dump, then hand the CSV to the bulk loader if one is configured
pub fn execute(plan: &Plan) -> Result<ConversionSummary> {
    info!("Executing plan: {}", plan.name());
    debug!("Plan: {:?}", plan);

    let summary = converter::convert(&plan.convert.input, &plan.convert.output)
        .map_err(|err| {
            let cause = conversion_failure_kind(&err);
            anyhow::Error::new(err).context(format!(
                "Conversion of {} failed ({})",
                plan.convert.input.display(),
                cause
            ))
        })?;

    if let Some(profile) = &plan.load_script {
        let loader = CypherScriptLoader::from_profile(plan.name(), profile);
        loader
            .bulk_load(&plan.convert.output)
            .context("Bulk-load script generation failed")?;
    }

    Ok(summary)
}

fn conversion_failure_kind(err: &ConvertError) -> &'static str {
    if err.is_io_error() {
        "I/O error"
    } else if err.is_malformed_input() {
        "malformed input"
    } else {
        "unknown"
    }
}
