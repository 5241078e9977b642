use std::io::{self, Write};

pub const HELP: &str = "\
Usage: wc_analogue [OPTION]... FILE

Print newline, word, and byte counts for FILE.
With no OPTION, the counts printed are lines, words and bytes.

    --lines, -l            print the newline counts
    --bytes, -c            print the byte counts
    --chars, -m            print the character counts
    --words, -w            print the word counts
    --max-line-length, -L  print the maximum display width
    --help                 display this help
    --version              output version information

Short options may be combined, e.g. -lw.";

pub const VERSION_BANNER: &str = concat!(
    "analogue of wc 8.32\n",
    "\n",
    env!("CARGO_PKG_NAME"),
    " ",
    env!("CARGO_PKG_VERSION"),
    "\n",
    "written by ",
    env!("CARGO_PKG_AUTHORS"),
);

pub fn write_help<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{HELP}")
}

pub fn write_version<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{VERSION_BANNER}")
}

/// Diagnostic for a token the resolver could not interpret.
pub fn write_invalid_option<W: Write>(out: &mut W, token: &str) -> io::Result<()> {
    writeln!(out, "Invalid option {token}")
}
