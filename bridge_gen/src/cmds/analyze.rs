/* Analyze command - show per-field operations, symbols, and signatures */

use super::common::load_schema_files;
use crate::codegen::context::EmissionContext;
use crate::codegen::signature::signature_for;
use bridge_schema::{FieldDescriptor, MessageType};
use clap::ValueEnum;
use serde_json::json;
use std::path::PathBuf;

#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
pub enum AnalyzeFormat {
    Text,
    Json,
}

/// Execute the analyze command: print what the codegen command would emit
/// for each field, without writing any artifact.
pub fn run(files: Vec<PathBuf>, format: AnalyzeFormat) -> anyhow::Result<()> {
    let schemas = load_schema_files(&files, false)?;

    let mut fields_json = Vec::new();

    for schema in &schemas {
        for message in &schema.messages {
            let message_type = MessageType::new(&schema.package, &message.name);
            for field_def in &message.fields {
                let field = FieldDescriptor::from_def(&message_type, field_def);
                if !field.is_repeated_scalar() {
                    if format == AnalyzeFormat::Text {
                        println!(
                            "[skip] {}.{} (handled by another generator)",
                            message_type.full_name(),
                            field.name
                        );
                    }
                    continue;
                }

                let ctx = EmissionContext::new(&field)?;
                match format {
                    AnalyzeFormat::Text => print_field_text(&ctx),
                    AnalyzeFormat::Json => fields_json.push(field_to_json(&ctx)),
                }
            }
        }
    }

    if format == AnalyzeFormat::Json {
        println!("{}", serde_json::to_string_pretty(&json!({ "fields": fields_json }))?);
    }
    Ok(())
}

fn print_field_text(ctx: &EmissionContext) {
    println!(
        "[~] {}.{} ({}, {:?} presence)",
        ctx.field.declaring_message.full_name(),
        ctx.field.name,
        ctx.rust_scalar(),
        ctx.field.presence
    );
    for (op, symbol) in ctx.operations() {
        let sig = signature_for(ctx.scalar, op);
        println!("  {:<5} {}", op.tag(), symbol);
        println!("        rust: {}", sig.rust_extern_decl(symbol));
        println!(
            "        cpp:  {}",
            sig.cpp_header(symbol, &ctx.field.declaring_message)
        );
    }
}

fn field_to_json(ctx: &EmissionContext) -> serde_json::Value {
    let operations: Vec<serde_json::Value> = ctx
        .operations()
        .map(|(op, symbol)| {
            let sig = signature_for(ctx.scalar, op);
            json!({
                "operation": op.tag(),
                "symbol": symbol,
                "rust-decl": sig.rust_extern_decl(symbol),
                "cpp-header": sig.cpp_header(symbol, &ctx.field.declaring_message),
            })
        })
        .collect();

    json!({
        "message": ctx.field.declaring_message.full_name(),
        "field": ctx.field.name,
        "scalar": ctx.rust_scalar(),
        "presence": ctx.field.presence,
        "operations": operations,
    })
}
