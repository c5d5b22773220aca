//! # Registry Inspection Subcommands
//!
//! `vocab` and `verticals`: read-only views of the vertical registry.

use std::collections::BTreeMap;
use std::io::Write;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use vertex_core::{ServiceKey, Vertical};
use vertex_engine::Engine;
use vertex_registry::{ColorScheme, ModuleId};

use crate::write_json;

/// Arguments for `vertex vocab`.
#[derive(Args, Debug)]
pub struct VocabArgs {
    /// Vertical label (canonical id or synonym).
    pub vertical: String,

    /// Print a single term instead of the whole vocabulary.
    #[arg(long)]
    pub key: Option<ServiceKey>,
}

/// Arguments for `vertex verticals`.
#[derive(Args, Debug)]
pub struct VerticalsArgs {
    /// Include each vertical's metadata field names.
    #[arg(long)]
    pub fields: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct VerticalSummary<'a> {
    vertical: Vertical,
    synonyms: Vec<&'static str>,
    color_scheme: ColorScheme,
    available_modules: &'a [ModuleId],
    #[serde(skip_serializing_if = "Option::is_none")]
    metadata_fields: Option<Vec<&'a str>>,
}

/// Execute `vertex vocab`.
pub fn run_vocab(args: &VocabArgs, engine: &Engine, out: &mut impl Write) -> Result<u8> {
    match args.key {
        Some(key) => {
            let term = engine.get_vocabulary(&args.vertical, key);
            writeln!(out, "{term}")?;
        }
        None => {
            let config = engine.resolve_vertical_config(&args.vertical);
            let terms: BTreeMap<&str, &str> = config
                .vocabulary
                .entries()
                .map(|(key, term)| (key.as_str(), term))
                .collect();
            write_json(out, &terms)?;
        }
    }
    Ok(0)
}

/// Execute `vertex verticals`.
pub fn run_verticals(args: &VerticalsArgs, engine: &Engine, out: &mut impl Write) -> Result<u8> {
    let summaries: Vec<VerticalSummary<'_>> = engine
        .registry()
        .iter()
        .map(|config| VerticalSummary {
            vertical: config.vertical,
            synonyms: config.vertical.synonyms().collect(),
            color_scheme: config.color_scheme,
            available_modules: &config.available_modules,
            metadata_fields: args.fields.then(|| config.metadata_fields()),
        })
        .collect();
    write_json(out, &summaries)?;
    Ok(0)
}
