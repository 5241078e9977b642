use alloc::format;
use alloc::string::ToString;
use alloc::vec::Vec;

use crate::error::ResolveError;
use crate::metric::Metric;

/// What to do with a letter inside a clustered short option that maps to no metric.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ClusterPolicy {
    /// Abort resolution with [`ResolveError::UnmappedLetter`].
    #[default]
    Strict,
    /// Report the letter as `-<letter>` through the diagnostic sink and skip it.
    Lenient,
}

enum Token<'a> {
    Flag(Metric),
    Cluster(&'a str),
    Unrecognized,
}

fn classify(token: &str) -> Token<'_> {
    if let Some(metric) = Metric::from_flag(token) {
        Token::Flag(metric)
    } else if is_cluster(token) {
        Token::Cluster(token)
    } else {
        Token::Unrecognized
    }
}

/// `-lw`, `-Lmc`: one leading dash and more than one letter.
fn is_cluster(token: &str) -> bool {
    token.starts_with('-') && !token.starts_with("--") && token.chars().count() > 2
}

fn expand_cluster<F>(
    token: &str,
    policy: ClusterPolicy,
    resolved: &mut Vec<Metric>,
    on_invalid: &mut F,
) -> Result<(), ResolveError>
where
    F: FnMut(&str),
{
    for letter in token.chars().filter(|&c| c != '-') {
        match (Metric::from_letter(letter), policy) {
            (Some(metric), _) => resolved.push(metric),
            (None, ClusterPolicy::Lenient) => on_invalid(&format!("-{letter}")),
            (None, ClusterPolicy::Strict) => {
                return Err(ResolveError::UnmappedLetter {
                    letter,
                    token: token.to_string(),
                });
            }
        }
    }
    Ok(())
}

/// Resolves option tokens into metrics, in encounter order and with duplicates kept.
///
/// Tokens that are neither a known flag nor a clustered short option are passed to
/// `on_invalid` and skipped.
///
/// # Errors
///
/// Returns [`ResolveError::UnmappedLetter`] under [`ClusterPolicy::Strict`] when a
/// clustered token contains a letter with no metric.
pub fn resolve<'a, I, F>(
    tokens: I,
    policy: ClusterPolicy,
    mut on_invalid: F,
) -> Result<Vec<Metric>, ResolveError>
where
    I: IntoIterator<Item = &'a str>,
    F: FnMut(&str),
{
    let mut resolved = Vec::new();

    for token in tokens {
        log::trace!("resolving option token {token:?}");
        match classify(token) {
            Token::Flag(metric) => resolved.push(metric),
            Token::Cluster(cluster) => {
                expand_cluster(cluster, policy, &mut resolved, &mut on_invalid)?;
            }
            Token::Unrecognized => on_invalid(token),
        }
    }

    Ok(resolved)
}
