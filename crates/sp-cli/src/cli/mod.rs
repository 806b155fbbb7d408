use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `smartpaste` binary.
#[derive(Debug, Parser)]
#[command(
    name = "smartpaste",
    version,
    about = "Fill forms from pasted text with a language model"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["smartpaste", "--format", "raw", "--verbose", "serve"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Serve(_)));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["smartpaste", "schema", "--list", "--quiet"])
            .expect("cli should parse");

        assert!(cli.quiet);
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(matches!(cli.command, Commands::Schema(ref args) if args.list));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["smartpaste", "--format", "table", "serve"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn schema_sources_are_exclusive() {
        assert!(Cli::try_parse_from(["smartpaste", "schema"]).is_err());
        assert!(
            Cli::try_parse_from(["smartpaste", "schema", "--list", "--name", "field_descriptor"])
                .is_err()
        );
    }

    #[test]
    fn paste_args_parse() {
        let cli = Cli::try_parse_from([
            "smartpaste",
            "paste",
            "--form",
            "signup.json",
            "--endpoint",
            "http://localhost:8787/api/extract",
        ])
        .expect("cli should parse");

        let Commands::Paste(args) = cli.command else {
            panic!("expected paste");
        };
        assert_eq!(args.form, PathBuf::from("signup.json"));
        assert_eq!(args.text, None);
        assert_eq!(
            args.endpoint.as_deref(),
            Some("http://localhost:8787/api/extract")
        );
    }
}
