use sp_config::SmartPasteConfig;
use sp_core::FieldDescriptor;
use sp_extract::{OpenAiExtractor, extract_form_data};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ExtractArgs;
use crate::input::{read_json, read_text};
use crate::output::output;

/// Handle `smartpaste extract`.
pub async fn handle(
    args: &ExtractArgs,
    config: &SmartPasteConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let fields: Vec<FieldDescriptor> = read_json(&args.fields)?;
    let text = read_text(args.text.as_deref())?;

    let extractor = OpenAiExtractor::from_config(&config.openai)?;
    let values = extract_form_data(&extractor, &text, &fields).await?;

    output(&values, flags.format)
}
