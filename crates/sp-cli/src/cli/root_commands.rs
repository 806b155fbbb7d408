use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Run the HTTP extraction endpoint.
    Serve(ServeArgs),
    /// Extract values for a field list from text.
    Extract(ExtractArgs),
    /// Print a generated extraction schema or a wire schema.
    Schema(SchemaArgs),
    /// Run a full smart paste against a form description.
    Paste(PasteArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ServeArgs {
    /// Address to listen on (overrides `server.bind`).
    #[arg(long)]
    pub bind: Option<String>,

    /// Route accepting extraction requests (overrides `server.path`).
    #[arg(long)]
    pub path: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct ExtractArgs {
    /// JSON file holding an array of field descriptors.
    #[arg(long)]
    pub fields: PathBuf,

    /// File holding the text to extract from (defaults to stdin).
    #[arg(long)]
    pub text: Option<PathBuf>,
}

#[derive(Clone, Debug, Args)]
#[group(required = true, multiple = false)]
pub struct SchemaArgs {
    /// Build the extraction schema for the field descriptors in this file.
    #[arg(long)]
    pub fields: Option<PathBuf>,

    /// Print a registered wire schema by name.
    #[arg(long)]
    pub name: Option<String>,

    /// List registered wire schema names.
    #[arg(long)]
    pub list: bool,
}

#[derive(Clone, Debug, Args)]
pub struct PasteArgs {
    /// JSON form description (`{"controls": [...]}`).
    #[arg(long)]
    pub form: PathBuf,

    /// File standing in for the clipboard (defaults to stdin).
    #[arg(long)]
    pub text: Option<PathBuf>,

    /// Extraction endpoint URL (overrides `component.endpoint`). Without one,
    /// extraction runs in-process.
    #[arg(long)]
    pub endpoint: Option<String>,
}
