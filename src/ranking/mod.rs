pub mod counter;
pub mod tags;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use counter::{WordCounter, WordEntry};
pub use tags::TagSet;

use crate::segment::Token;

/// Default number of words to report
pub const DEFAULT_COUNT: usize = 5;

/// Filter and limit settings of a ranking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankOptions {
    /// allowed part of speech tags
    pub tags: TagSet,
    /// tokens with a lower dictionary frequency are ignored
    pub min_frequency: u64,
    /// result limit (K)
    pub count: usize,
}

impl RankOptions {
    pub fn new(tags: TagSet, min_frequency: u64, count: usize) -> Self {
        Self { tags, min_frequency, count }
    }
}

impl Default for RankOptions {
    fn default() -> Self {
        Self::new(TagSet::parse(tags::DEFAULT_TAGS), 0, DEFAULT_COUNT)
    }
}

/// One line of a ranking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedWord {
    pub text: String,
    pub tag: String,
    pub count: u64,
}

impl RankedWord {
    pub fn new(text: impl Into<String>, tag: impl Into<String>, count: u64) -> Self {
        Self {
            text: text.into(),
            tag: tag.into(),
            count,
        }
    }
}

impl From<&WordEntry> for RankedWord {
    fn from(entry: &WordEntry) -> Self {
        Self::new(entry.text.clone(), entry.tag.clone(), entry.count)
    }
}

/// `text/tag`
impl fmt::Display for RankedWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.text, self.tag)
    }
}

/// Count and rank a token sequence in one go
///
/// # Arguments
/// * `tokens` - tagged tokens from the segmenter
/// * `options` - tag allow-set, frequency threshold and result limit
///
/// # Returns
/// * `Vec<RankedWord>` - at most `options.count` words, count descending
pub fn rank<'t, I>(tokens: I, options: &RankOptions) -> Vec<RankedWord>
where
    I: IntoIterator<Item = Token<'t>>,
{
    let mut counter = WordCounter::new(options);
    counter.add_tokens(tokens);
    counter.into_ranking()
}
