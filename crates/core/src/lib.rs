#![no_std]
#![allow(clippy::cargo_common_metadata)]

extern crate alloc;

pub mod counter;
pub mod error;
pub mod metric;
pub mod resolver;

pub use error::ResolveError;
pub use metric::{Metric, MetricSet};
pub use resolver::{ClusterPolicy, resolve};
