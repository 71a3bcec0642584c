pub mod to_cypher;

use std::path::Path;

use crate::errors::LoadScriptError;

/// Hands a finished edge CSV to whatever imports it into the graph database.
///
/// Implementations never connect to a database themselves; they produce the
/// artefacts an operator (or a separate tool) runs against it.
pub trait BulkLoader {
    fn bulk_load(&self, csv_path: &Path) -> Result<(), LoadScriptError>;
}
