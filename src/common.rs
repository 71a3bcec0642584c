use handlebars::{handlebars_helper, Handlebars};
use tracing::info;

use std::fs::File;
use std::io::Write;
use std::path::Path;

pub fn create_path_if_not_exists(path: &Path) -> std::io::Result<()> {
    // only the directory part matters; a bare file name needs nothing
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            info!("Creating path: {:?}", parent);
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

pub fn write_string_to_file(path: &Path, content: &str) -> std::io::Result<()> {
    create_path_if_not_exists(path)?;
    let mut file = File::create(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

/// Escape a value for use inside a single-quoted Cypher string literal
pub fn cypher_quote(s: &str) -> String {
    s.replace('\\', "\\\\").replace('\'', "\\'")
}

/// Flatten a value onto one line so it cannot escape a `//` comment
pub fn cypher_comment(s: &str) -> String {
    s.replace(['\r', '\n'], " ")
}

pub fn get_handlebars() -> Handlebars<'static> {
    let mut handlebars = Handlebars::new();
    handlebars.set_strict_mode(true);

    handlebars_helper!(cypher_string: |s: String| cypher_quote(&s));
    handlebars.register_helper("cypher_string", Box::new(cypher_string));

    handlebars_helper!(cypher_comment_text: |s: String| cypher_comment(&s));
    handlebars.register_helper("cypher_comment", Box::new(cypher_comment_text));

    handlebars
}
