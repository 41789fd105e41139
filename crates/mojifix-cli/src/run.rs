// crates/mojifix-cli/src/run.rs

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use mojifix_core::{clean_text, manifest};

#[derive(Args, Debug)]
pub struct TargetArgs {
    /// Site root holding the manifest and the listed HTML files
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Manifest path, relative to the root
    #[arg(long, default_value = "services.json")]
    pub manifest: PathBuf,
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Rewrite files that change.
    Write,
    /// Report only; leave every file as-is.
    DryRun,
}

/// Resolve the processing set: for each manifest filename (sorted), the
/// root-relative path, then the `docs/` mirror right after it when one exists.
pub fn resolve_paths(args: &TargetArgs) -> anyhow::Result<Vec<PathBuf>> {
    let manifest_path = args.root.join(&args.manifest);
    let raw = fs::read_to_string(&manifest_path)
        .with_context(|| format!("read manifest: {}", manifest_path.display()))?;
    let names = manifest::parse(&raw)
        .with_context(|| format!("parse manifest: {}", manifest_path.display()))?;

    let mut paths = Vec::new();
    for name in names {
        paths.push(args.root.join(&name));
        let docs = args.root.join("docs").join(&name);
        if docs.exists() {
            paths.push(docs);
        }
    }
    Ok(paths)
}

/// Sequential read -> clean -> conditional write over the resolved set.
///
/// Any missing file, unreadable file, or failed write aborts the whole run;
/// files already rewritten stay rewritten. Undecodable bytes are folded to
/// U+FFFD by the lossy read and swept up by the last cleaning pass.
pub fn process(args: &TargetArgs, mode: Mode) -> anyhow::Result<()> {
    let mut any_changed = false;

    for path in resolve_paths(args)? {
        let raw = fs::read(&path).with_context(|| format!("read file: {}", path.display()))?;
        let text = String::from_utf8_lossy(&raw).into_owned();
        let (cleaned, tally) = clean_text(&text);
        let changed = cleaned != text;

        if changed && mode == Mode::Write {
            fs::write(&path, &cleaned)
                .with_context(|| format!("write file: {}", path.display()))?;
        }
        any_changed = any_changed || changed;

        let status = if changed { "changed" } else { "unchanged" };
        if tally.is_empty() {
            println!("{}: {}", path.display(), status);
        } else {
            println!("{}: {} ({})", path.display(), status, tally.summary());
        }
    }

    if !any_changed {
        println!("No changes needed.");
    }
    Ok(())
}
