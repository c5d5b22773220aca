//! # vertex CLI entry point
//!
//! Parses arguments, builds the engine once, and dispatches to the
//! subcommand handlers in the library.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use vertex_cli::inspect::{run_verticals, run_vocab, VerticalsArgs, VocabArgs};
use vertex_cli::resolve::{run_flags, run_menu, run_resolve, FlagsArgs, MenuArgs, ResolveArgs};
use vertex_cli::validate::{run_validate, ValidateArgs};
use vertex_cli::finish_output;
use vertex_engine::Engine;

/// Vertex: multi-tenant dashboard configuration engine.
///
/// Resolves what a tenant sees (vocabulary, modules, feature flags, menu)
/// from its vertical and tier, and validates record metadata against the
/// vertical's schema.
#[derive(Parser, Debug)]
#[command(name = "vertex", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// YAML file of registry overrides applied on top of the builtin table.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve a tenant profile into config, flags, and menu.
    Resolve(ResolveArgs),

    /// Print the vocabulary of a vertical.
    Vocab(VocabArgs),

    /// Validate record metadata against a vertical's schema.
    Validate(ValidateArgs),

    /// Print the feature flags of a tier.
    Flags(FlagsArgs),

    /// Print the navigation menu of a vertical and tier.
    Menu(MenuArgs),

    /// List canonical verticals and their synonyms.
    Verticals(VerticalsArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.log_json);

    let engine = match Engine::load(cli.config.as_deref()) {
        Ok(engine) => engine,
        Err(e) => {
            tracing::error!("{e}");
            return ExitCode::from(2);
        }
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let result = match &cli.command {
        Commands::Resolve(args) => run_resolve(args, &engine, &mut out),
        Commands::Vocab(args) => run_vocab(args, &engine, &mut out),
        Commands::Validate(args) => run_validate(args, &engine, &mut out),
        Commands::Flags(args) => run_flags(args, &engine, &mut out),
        Commands::Menu(args) => run_menu(args, &engine, &mut out),
        Commands::Verticals(args) => run_verticals(args, &engine, &mut out),
    };
    let result = finish_output(&mut out, result);

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(2)
        }
    }
}

/// `RUST_LOG` wins when set; otherwise the `-v` count picks the level.
fn init_tracing(verbose: u8, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        })
    });

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vertex_access::MenuMode;

    #[test]
    fn cli_parse_resolve() {
        let cli = Cli::try_parse_from([
            "vertex", "resolve", "--vertical", "garage", "--tier", "pro", "--mode", "locked",
        ])
        .unwrap();
        match cli.command {
            Commands::Resolve(args) => {
                assert_eq!(args.vertical, "garage");
                assert_eq!(args.tier, "pro");
                assert_eq!(args.mode, MenuMode::Locked);
                assert!(args.tenant_id.is_none());
                assert!(!args.strict);
            }
            other => panic!("expected resolve, got {other:?}"),
        }
    }

    #[test]
    fn cli_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "vertex", "flags", "elite", "-vv", "--config", "overrides.yaml",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("overrides.yaml")));
    }

    #[test]
    fn cli_parse_vocab_key() {
        let cli = Cli::try_parse_from(["vertex", "vocab", "beauty", "--key", "client"]).unwrap();
        match cli.command {
            Commands::Vocab(args) => {
                assert_eq!(args.key, Some(vertex_core::ServiceKey::Client));
            }
            other => panic!("expected vocab, got {other:?}"),
        }
    }

    #[test]
    fn cli_rejects_unknown_vocab_key() {
        assert!(Cli::try_parse_from(["vertex", "vocab", "beauty", "--key", "price"]).is_err());
    }

    #[test]
    fn cli_rejects_unknown_menu_mode() {
        assert!(Cli::try_parse_from(["vertex", "menu", "legal", "pro", "--mode", "hidden"]).is_err());
    }

    #[test]
    fn cli_validate_requires_input() {
        assert!(Cli::try_parse_from(["vertex", "validate", "automotive"]).is_err());
        assert!(Cli::try_parse_from([
            "vertex", "validate", "automotive", "--json", "{}", "--file", "m.json",
        ])
        .is_err());
    }
}
