use alloc::string::String;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// A letter inside a clustered short option (`-lxw`) has no metric.
    #[error("unknown option letter '{letter}' in '{token}'")]
    UnmappedLetter { letter: char, token: String },
}
