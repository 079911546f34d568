/* Common utilities shared between the analyze and codegen commands */

use anyhow::Context;
use bridge_schema::SchemaFile;
use std::path::PathBuf;

/// Load and parse the given schema files in order.
pub fn load_schema_files(files: &[PathBuf], verbose: bool) -> anyhow::Result<Vec<SchemaFile>> {
    let mut schemas = Vec::with_capacity(files.len());
    for file in files {
        let text = std::fs::read_to_string(file)
            .with_context(|| format!("failed to read schema file {}", file.display()))?;
        let schema: SchemaFile = serde_yml::from_str(&text)
            .with_context(|| format!("failed to parse schema file {}", file.display()))?;
        if verbose {
            println!(
                "[~] Loaded {} ({} message(s), package '{}')",
                file.display(),
                schema.messages.len(),
                schema.package
            );
        }
        schemas.push(schema);
    }
    Ok(schemas)
}
