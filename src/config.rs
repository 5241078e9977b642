use derive_builder::Builder;
use wc_analogue_core::ClusterPolicy;

pub const STRICT_ENV: &str = "WC_ANALOGUE_STRICT";
pub const LENIENT_CLUSTERS_ENV: &str = "WC_ANALOGUE_LENIENT_CLUSTERS";

/// How file access failures affect a metric.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// The metric reports 0 and the run continues.
    #[default]
    Absorb,
    /// The first failure aborts the run.
    Surface,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Builder)]
#[builder(setter(into))]
pub struct Config {
    #[builder(default)]
    pub error_policy: ErrorPolicy,
    #[builder(default)]
    pub cluster_policy: ClusterPolicy,
}

impl Config {
    /// Build from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let error_policy = if env_flag(STRICT_ENV, lookup(STRICT_ENV)) {
            ErrorPolicy::Surface
        } else {
            ErrorPolicy::Absorb
        };
        let cluster_policy = if env_flag(LENIENT_CLUSTERS_ENV, lookup(LENIENT_CLUSTERS_ENV)) {
            ClusterPolicy::Lenient
        } else {
            ClusterPolicy::Strict
        };

        let config = ConfigBuilder::default()
            .error_policy(error_policy)
            .cluster_policy(cluster_policy)
            .build()
            .unwrap_or_default();
        log::debug!("configuration: {config:?}");
        config
    }
}

fn env_flag(key: &str, value: Option<String>) -> bool {
    let Some(value) = value else {
        return false;
    };
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "" | "0" | "false" | "no" | "off" => false,
        other => {
            log::warn!("{key}={other:?} is not a boolean; treating as false");
            false
        }
    }
}
