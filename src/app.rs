use crate::args::{Args, Invocation};
use crate::config::Config;
use crate::{engine, presentation};
use anyhow::{Context, Result};
use std::borrow::Cow;
use std::io::Write;
use std::path::Path;
use wc_analogue_core::{MetricSet, resolve};

/// Dispatch one invocation, writing everything meant for stdout to `out`.
///
/// # Errors
///
/// Fails on an unmapped clustered letter under the strict cluster policy, on a file
/// failure under the surfacing error policy, or when `out` cannot be written.
pub fn run<W: Write>(args: &Args, config: &Config, out: &mut W) -> Result<()> {
    match args.invocation() {
        Invocation::Help => presentation::write_help(out)?,
        Invocation::Version => presentation::write_version(out)?,
        Invocation::Defaults { filename } => {
            report(Path::new(filename), &MetricSet::defaults(), config, out)?;
        }
        Invocation::WithOptions { options, filename } => {
            let options: Vec<Cow<'_, str>> =
                options.iter().map(|token| token.to_string_lossy()).collect();
            let mut rejected = Vec::new();
            let resolved = resolve(
                options.iter().map(|token| &**token),
                config.cluster_policy,
                |token| rejected.push(token.to_owned()),
            );

            for token in &rejected {
                presentation::write_invalid_option(out, token)?;
            }

            let metrics: MetricSet = resolved
                .context("failed to resolve options")?
                .into_iter()
                .collect();
            log::debug!("requested metrics: {metrics:?}");
            report(Path::new(filename), &metrics, config, out)?;
        }
    }
    Ok(())
}

fn report<W: Write>(
    filename: &Path,
    metrics: &MetricSet,
    config: &Config,
    out: &mut W,
) -> Result<()> {
    let line = engine::render(filename, metrics, config.error_policy)
        .with_context(|| format!("failed to count '{}'", filename.display()))?;
    writeln!(out, "{line}")?;
    Ok(())
}
