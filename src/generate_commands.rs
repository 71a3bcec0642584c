use anyhow::{bail, Result};
use std::path::Path;
use tracing::{error, info};

use crate::common;
use crate::plan::Plan;

pub fn generate_template(exporter: &str) -> Result<String> {
    info!("Generating exporter template: {}", exporter);
    match exporter {
        "cypher" => Ok(crate::export::to_cypher::get_template()),
        _ => {
            error!("Unsupported exporter: {} - use cypher", exporter);
            bail!("Unsupported exporter: {}", exporter)
        }
    }
}

/// Write the default plan to `plan_file`, creating parent directories.
///
/// Plans resolve relative paths against their own directory, so the default
/// paths are written anchored to the current directory. Running the plan from
/// anywhere then reads and writes the same files as a bare run from here.
pub fn init_plan(plan_file: &Path) -> Result<()> {
    info!("Initializing plan: {}", plan_file.display());
    let mut plan = Plan::default();
    plan.resolve_paths(&std::env::current_dir()?);
    let serialized_plan = plan.to_yaml()?;
    common::write_string_to_file(plan_file, &serialized_plan)?;
    Ok(())
}
