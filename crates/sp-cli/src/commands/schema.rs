use anyhow::anyhow;
use sp_core::FieldDescriptor;
use sp_schema::{ExtractionSchema, SchemaRegistry};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::input::read_json;
use crate::output::output;

/// Handle `smartpaste schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = resolve(args)?;
    output(&schema, flags.format)
}

fn resolve(args: &SchemaArgs) -> anyhow::Result<serde_json::Value> {
    let registry = SchemaRegistry::new();

    if args.list {
        return Ok(serde_json::to_value(registry.list())?);
    }
    if let Some(name) = &args.name {
        return registry.get(name).cloned().ok_or_else(|| {
            anyhow!(
                "unknown schema '{name}' (available: {})",
                registry.list().join(", ")
            )
        });
    }
    let path = args
        .fields
        .as_deref()
        .ok_or_else(|| anyhow!("one of --fields, --name, or --list is required"))?;
    let fields: Vec<FieldDescriptor> = read_json(path)?;
    Ok(ExtractionSchema::build(&fields)?.to_json_schema())
}
