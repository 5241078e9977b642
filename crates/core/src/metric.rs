use alloc::collections::BTreeSet;
use alloc::collections::btree_set;
use core::fmt;
use core::iter::Copied;

/// A single quantity that can be reported for a file.
///
/// Variants are declared in the column order of the summary line, so the
/// derived `Ord` doubles as the output order of a [`MetricSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Metric {
    /// Number of `\n` characters.
    LineCount,
    /// Number of maximal non-whitespace runs.
    WordCount,
    /// Number of decoded code points.
    CharCount,
    /// Size of the raw content.
    ByteCount,
    /// Length in code points of the longest line, newline excluded.
    MaxLineLength,
}

impl Metric {
    pub const ALL: [Self; 5] = [
        Self::LineCount,
        Self::WordCount,
        Self::CharCount,
        Self::ByteCount,
        Self::MaxLineLength,
    ];

    /// Metrics reported when the only argument is a filename.
    pub const DEFAULTS: [Self; 3] = [Self::LineCount, Self::WordCount, Self::ByteCount];

    /// Maps a short option letter (`l`, `w`, `m`, `c`, `L`).
    #[must_use]
    pub const fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'l' => Some(Self::LineCount),
            'w' => Some(Self::WordCount),
            'm' => Some(Self::CharCount),
            'c' => Some(Self::ByteCount),
            'L' => Some(Self::MaxLineLength),
            _ => None,
        }
    }

    /// Maps a complete option token such as `--lines` or `-l`.
    #[must_use]
    pub fn from_flag(token: &str) -> Option<Self> {
        match token {
            "--lines" | "-l" => Some(Self::LineCount),
            "--words" | "-w" => Some(Self::WordCount),
            "--chars" | "-m" => Some(Self::CharCount),
            "--bytes" | "-c" => Some(Self::ByteCount),
            "--max-line-length" | "-L" => Some(Self::MaxLineLength),
            _ => None,
        }
    }

    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::LineCount => 'l',
            Self::WordCount => 'w',
            Self::CharCount => 'm',
            Self::ByteCount => 'c',
            Self::MaxLineLength => 'L',
        }
    }

    #[must_use]
    pub const fn long_flag(self) -> &'static str {
        match self {
            Self::LineCount => "--lines",
            Self::WordCount => "--words",
            Self::CharCount => "--chars",
            Self::ByteCount => "--bytes",
            Self::MaxLineLength => "--max-line-length",
        }
    }

    /// Whether the metric is computed on decoded text rather than raw bytes.
    #[must_use]
    pub const fn is_textual(self) -> bool {
        !matches!(self, Self::ByteCount)
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.long_flag()[2..])
    }
}

/// Deduplicated metrics requested for one invocation.
///
/// Iteration follows [`Metric`] declaration order regardless of insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetricSet(BTreeSet<Metric>);

impl MetricSet {
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// The default triple: lines, words and bytes.
    #[must_use]
    pub fn defaults() -> Self {
        Metric::DEFAULTS.into_iter().collect()
    }

    /// Adds a metric, returning `false` if it was already present.
    pub fn insert(&mut self, metric: Metric) -> bool {
        self.0.insert(metric)
    }

    #[must_use]
    pub fn contains(&self, metric: Metric) -> bool {
        self.0.contains(&metric)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> Copied<btree_set::Iter<'_, Metric>> {
        self.0.iter().copied()
    }
}

impl FromIterator<Metric> for MetricSet {
    fn from_iter<I: IntoIterator<Item = Metric>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<Metric> for MetricSet {
    fn extend<I: IntoIterator<Item = Metric>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl IntoIterator for MetricSet {
    type Item = Metric;
    type IntoIter = btree_set::IntoIter<Metric>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a MetricSet {
    type Item = Metric;
    type IntoIter = Copied<btree_set::Iter<'a, Metric>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
