use clap::Parser;
use std::ffi::{OsStr, OsString};
use std::iter;

/// Raw command line.
///
/// clap only collects the tokens here: its own help and version flags are
/// disabled and every token lands in `tokens` byte for byte, including `--` and
/// filenames that are not UTF-8. Interpretation happens in [`Args::invocation`]
/// and the option resolver.
#[derive(Parser, Debug, Clone, Default)]
#[command(
    name = "wc_analogue",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Args {
    #[arg(value_name = "TOKEN")]
    pub tokens: Vec<OsString>,
}

/// What the command line asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Invocation<'a> {
    Help,
    Version,
    /// A lone filename: report the default triple.
    Defaults { filename: &'a OsStr },
    /// Options followed by the filename in last position.
    WithOptions {
        options: &'a [OsString],
        filename: &'a OsStr,
    },
}

impl Args {
    /// Parse the process arguments.
    #[must_use]
    pub fn from_env() -> Self {
        Self::parse_argv(std::env::args_os())
    }

    /// Parse a full argv, program name first.
    ///
    /// A `--` is inserted after the program name so clap's end-of-options marker is
    /// spent there and a user-supplied `--` reaches [`Args::invocation`].
    pub fn parse_argv<I, T>(argv: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut argv = argv.into_iter().map(Into::<OsString>::into);
        let program = argv.next().unwrap_or_else(|| OsString::from("wc_analogue"));
        Self::parse_from(
            iter::once(program)
                .chain(iter::once(OsString::from("--")))
                .chain(argv),
        )
    }

    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn invocation(&self) -> Invocation<'_> {
        match self.tokens.as_slice() {
            [] => Invocation::Help,
            [only] if only == "--help" => Invocation::Help,
            [only] if only == "--version" => Invocation::Version,
            [filename] => Invocation::Defaults { filename },
            [options @ .., filename] => Invocation::WithOptions { options, filename },
        }
    }
}
