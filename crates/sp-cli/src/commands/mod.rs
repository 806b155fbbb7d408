use sp_config::SmartPasteConfig;

use crate::cli::{Commands, GlobalFlags};

pub mod extract;
pub mod paste;
pub mod schema;
pub mod serve;

/// Route a parsed command to its handler.
pub async fn dispatch(
    command: Commands,
    config: &SmartPasteConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Serve(args) => serve::handle(&args, config).await,
        Commands::Extract(args) => extract::handle(&args, config, flags).await,
        Commands::Schema(args) => schema::handle(&args, flags),
        Commands::Paste(args) => paste::handle(&args, config, flags).await,
    }
}
