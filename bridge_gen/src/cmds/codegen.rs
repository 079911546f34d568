/* Codegen command - generate accessor and thunk code from schema files */

use super::common::load_schema_files;
use crate::codegen::generate_schemas;
use clap::ValueEnum;
use std::path::PathBuf;

#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
pub enum Language {
    Rust,
    Cpp,
    All,
}

/// Execute the codegen command: walk every message of every schema file
/// and write the two generated artifacts to the output directory.
pub fn run(
    files: Vec<PathBuf>,
    language: Language,
    output_dir: PathBuf,
    verbose: bool,
) -> anyhow::Result<()> {
    if verbose {
        println!("Bridge Generator - Accessor/Thunk Generation");
        println!("============================================\n");
        println!("[~] Configuration:");
        println!("  Language: {:?}", language);
        println!("  Output directory: {}", output_dir.display());
        println!("  Input files: {}", files.len());
        for file in &files {
            println!("    - {}", file.display());
        }
        println!();
    }

    let schemas = load_schema_files(&files, verbose)?;
    let artifacts = generate_schemas(&schemas)?;

    std::fs::create_dir_all(&output_dir)?;

    if matches!(language, Language::Rust | Language::All) {
        let path = output_dir.join("accessors.rs");
        std::fs::write(&path, &artifacts.accessors_rs)?;
        if verbose {
            println!("[✓] Generated Rust accessors: {}", path.display());
        }
    }

    if matches!(language, Language::Cpp | Language::All) {
        let path = output_dir.join("thunks.cc");
        std::fs::write(&path, &artifacts.thunks_cc)?;
        if verbose {
            println!("[✓] Generated C++ thunks: {}", path.display());
        }
    }

    if verbose {
        println!("[✓] Code generation complete!");
    }
    Ok(())
}
