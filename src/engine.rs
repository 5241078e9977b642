//! Metric engine: computes requested metrics for one file and renders the summary line.
//!
//! Every metric reads the file on its own. The handle lives only inside
//! [`read_target`], so it is closed before the counting starts, on success and on
//! error alike.

use std::fmt::Write;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::{debug, warn};
use wc_analogue_core::{Metric, MetricSet, counter};

use crate::config::ErrorPolicy;
use crate::error::{CountError, Result};

/// Read the whole file into memory.
fn read_target(path: &Path) -> Result<Vec<u8>> {
    let to_error = |source: std::io::Error| CountError::FileRead {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::open(path).map_err(to_error)?;
    let mut buf = Vec::new();
    file.read_to_end(&mut buf).map_err(to_error)?;
    Ok(buf)
}

/// Compute one metric for the file at `path`.
///
/// # Errors
///
/// Fails if the file cannot be read, or is not UTF-8 for a textual metric.
pub fn count(path: &Path, metric: Metric) -> Result<usize> {
    let content = read_target(path)?;
    counter::measure(metric, &content).map_err(|source| CountError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Turn a metric outcome into a reported value.
///
/// This is the only place where file failures are converted; counting code never
/// decides whether an error is fatal.
///
/// # Errors
///
/// Passes the failure through under [`ErrorPolicy::Surface`].
pub fn apply_policy(metric: Metric, outcome: Result<usize>, policy: ErrorPolicy) -> Result<usize> {
    match (outcome, policy) {
        (Ok(value), _) => Ok(value),
        (Err(e), ErrorPolicy::Absorb) => {
            warn!("{metric} reported as 0: {e}");
            Ok(0)
        }
        (Err(e), ErrorPolicy::Surface) => Err(e),
    }
}

/// Render `" <v1> <v2> ... <filename>"` for the metrics in `metrics`.
///
/// An empty set renders as `" <filename>"`. Filenames that are not UTF-8 are shown
/// lossily; the file itself is opened by its exact path.
///
/// # Errors
///
/// Only under [`ErrorPolicy::Surface`], with the first failing metric's error.
pub fn render<P: AsRef<Path>>(
    path: P,
    metrics: &MetricSet,
    policy: ErrorPolicy,
) -> Result<String> {
    let path = path.as_ref();
    let mut line = String::new();

    for metric in metrics {
        let value = apply_policy(metric, count(path, metric), policy)?;
        debug!("{}: {metric} = {value}", path.display());
        let _ = write!(line, " {value}");
    }

    let _ = write!(line, " {}", path.display());
    Ok(line)
}
