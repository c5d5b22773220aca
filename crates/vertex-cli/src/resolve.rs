//! # Tenant Resolution Subcommands
//!
//! `resolve`, `flags`, and `menu`: the tier-dependent views of a tenant.

use std::io::Write;

use anyhow::{bail, Result};
use clap::Args;
use serde::Serialize;

use vertex_access::{Feature, FeatureFlags, MenuItem, MenuMode};
use vertex_core::{TenantId, TenantProfile, Tier, Vertical};
use vertex_engine::Engine;

use crate::write_json;

/// Arguments for `vertex resolve`.
#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Vertical label from the tenant profile (canonical id or synonym).
    #[arg(long, default_value = "")]
    pub vertical: String,

    /// Tier label from the tenant profile (either taxonomy).
    #[arg(long, default_value = "")]
    pub tier: String,

    /// Tenant identifier (bare UUID or `tenant:<uuid>`). Random if omitted.
    #[arg(long)]
    pub tenant_id: Option<TenantId>,

    /// How entries above the tenant's tier are presented.
    #[arg(long, default_value = "omit")]
    pub mode: MenuMode,

    /// Fail instead of falling back when a label does not resolve.
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for `vertex flags`.
#[derive(Args, Debug)]
pub struct FlagsArgs {
    /// Tier label (either taxonomy).
    pub tier: String,
}

/// Arguments for `vertex menu`.
#[derive(Args, Debug)]
pub struct MenuArgs {
    /// Vertical label (canonical id or synonym).
    pub vertical: String,

    /// Tier label (either taxonomy).
    pub tier: String,

    /// `omit` drops unreachable entries, `locked` marks them.
    #[arg(long, default_value = "omit")]
    pub mode: MenuMode,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FlagsReport {
    tier: Tier,
    flags: FeatureFlags,
    enabled: Vec<Feature>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MenuReport {
    vertical: Vertical,
    tier: Tier,
    mode: MenuMode,
    items: Vec<MenuItem>,
}

/// Execute `vertex resolve`.
pub fn run_resolve(args: &ResolveArgs, engine: &Engine, out: &mut impl Write) -> Result<u8> {
    if args.strict {
        check_strict(&args.vertical, &args.tier)?;
    }
    let profile = TenantProfile::new(
        args.tenant_id.unwrap_or_default(),
        args.vertical.as_str(),
        args.tier.as_str(),
    );
    write_json(out, &engine.resolve_tenant(&profile, args.mode))?;
    Ok(0)
}

/// Execute `vertex flags`.
pub fn run_flags(args: &FlagsArgs, engine: &Engine, out: &mut impl Write) -> Result<u8> {
    let tier = engine.normalize_tier(&args.tier);
    let flags = engine.resolve_feature_flags(&args.tier);
    let report = FlagsReport {
        tier,
        flags,
        enabled: flags.enabled(),
    };
    write_json(out, &report)?;
    Ok(0)
}

/// Execute `vertex menu`.
pub fn run_menu(args: &MenuArgs, engine: &Engine, out: &mut impl Write) -> Result<u8> {
    let report = MenuReport {
        vertical: engine.resolve_vertical(&args.vertical),
        tier: engine.normalize_tier(&args.tier),
        mode: args.mode,
        items: engine.build_menu(&args.vertical, &args.tier, args.mode),
    };
    write_json(out, &report)?;
    Ok(0)
}

fn check_strict(vertical: &str, tier: &str) -> Result<()> {
    if Vertical::resolve(vertical).is_none() {
        bail!("vertical {vertical:?} is neither a canonical vertical nor a known synonym");
    }
    if Tier::from_label(tier).is_none() {
        bail!("tier {tier:?} is not a known tier label");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn run<F>(f: F) -> (u8, Value)
    where
        F: FnOnce(&Engine, &mut Vec<u8>) -> Result<u8>,
    {
        let engine = Engine::builtin().unwrap();
        let mut out = Vec::new();
        let code = f(&engine, &mut out).unwrap();
        (code, serde_json::from_slice(&out).unwrap())
    }

    #[test]
    fn test_resolve_outputs_resolution() {
        let args = ResolveArgs {
            vertical: "garage".into(),
            tier: "enterprise".into(),
            tenant_id: None,
            mode: MenuMode::Omit,
            strict: false,
        };
        let (code, value) = run(|e, out| run_resolve(&args, e, out));
        assert_eq!(code, 0);
        assert_eq!(value["vertical"], "automotive");
        assert_eq!(value["tier"], "elite");
        assert_eq!(value["config"]["vocabulary"]["service"], "Réparation");
    }

    #[test]
    fn test_resolve_strict_rejects_unknown_vertical() {
        let engine = Engine::builtin().unwrap();
        let args = ResolveArgs {
            vertical: "bakery".into(),
            tier: "pro".into(),
            tenant_id: None,
            mode: MenuMode::Omit,
            strict: true,
        };
        let mut out = Vec::new();
        assert!(run_resolve(&args, &engine, &mut out).is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn test_flags_report() {
        let args = FlagsArgs { tier: "pro".into() };
        let (_, value) = run(|e, out| run_flags(&args, e, out));
        assert_eq!(value["tier"], "pro");
        assert_eq!(value["flags"]["panicButton"], false);
        assert_eq!(value["flags"]["editCalendar"], true);
        assert_eq!(value["enabled"].as_array().unwrap().len(), 8);
    }

    #[test]
    fn test_menu_report_locked() {
        let args = MenuArgs {
            vertical: "restaurant".into(),
            tier: "starter".into(),
            mode: MenuMode::Locked,
        };
        let (_, value) = run(|e, out| run_menu(&args, e, out));
        assert_eq!(value["mode"], "locked");
        let tables = value["items"]
            .as_array()
            .unwrap()
            .iter()
            .find(|i| i["path"] == "/tables")
            .unwrap();
        assert_eq!(tables["locked"], true);
        assert_eq!(tables["requiredLabel"], "PRO");
    }
}
