use std::{cmp::Ordering, collections::BinaryHeap};

use indexmap::IndexMap;

use crate::{ranking::{RankOptions, RankedWord}, segment::Token};

/// Aggregated occurrences of one token text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    pub text: String,
    /// tag of the first counted occurrence
    pub tag: String,
    pub count: u64,
}

/// Heap item ordered by count, then by text in reverse
/// so that `BinaryHeap::pop` yields the smaller text first among equal counts.
#[derive(Debug)]
struct Ranked<'a>(&'a WordEntry);

impl PartialEq for Ranked<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Ranked<'_> {}

impl Ord for Ranked<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .count
            .cmp(&other.0.count)
            .then_with(|| other.0.text.cmp(&self.0.text))
    }
}

impl PartialOrd for Ranked<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

///  WordCounter 構造体
/// Filters tokens by tag and dictionary frequency and counts the survivors per text.
///
/// # Examples
/// ```
/// use magnifier::{RankOptions, TagSet, Token, WordCounter};
/// let options = RankOptions::new(TagSet::parse("n"), 0, 1);
/// let mut counter = WordCounter::new(&options);
/// counter.add_tokens([
///     Token::new("dog", "n", 5),
///     Token::new("cat", "n", 3),
///     Token::new("dog", "n", 5),
///     Token::new("run", "v", 5),
/// ]);
///
/// let top = counter.top_k(1);
/// assert_eq!(top[0].text, "dog");
/// assert_eq!(top[0].count, 2);
/// ```
#[derive(Debug, Clone)]
pub struct WordCounter<'o> {
    options: &'o RankOptions,
    words: IndexMap<String, WordEntry>,
    /// tokens seen, counted or not
    seen: u64,
}

/// Tokenの追加
impl<'o> WordCounter<'o> {
    pub fn new(options: &'o RankOptions) -> Self {
        Self {
            options,
            words: IndexMap::new(),
            seen: 0,
        }
    }

    /// Count a token if its tag is allowed and its frequency reaches the threshold
    ///
    /// # Arguments
    /// * `token` - token to count
    ///
    /// # Returns
    /// * `bool` - true when the token was counted
    #[inline]
    pub fn add_token(&mut self, token: &Token<'_>) -> bool {
        self.seen += 1;
        if !self.options.tags.contains(token.tag()) {
            return false;
        }
        if token.frequency() < self.options.min_frequency {
            return false;
        }
        match self.words.get_mut(token.text()) {
            Some(entry) => entry.count += 1,
            None => {
                self.words.insert(
                    token.text().to_string(),
                    WordEntry {
                        text: token.text().to_string(),
                        tag: token.tag().to_string(),
                        count: 1,
                    },
                );
            }
        }
        true
    }

    /// Count several tokens
    ///
    /// # Returns
    /// * `u64` - number of tokens counted
    pub fn add_tokens<'t, I>(&mut self, tokens: I) -> u64
    where
        I: IntoIterator<Item = Token<'t>>,
    {
        tokens
            .into_iter()
            .map(|token| self.add_token(&token) as u64)
            .sum()
    }
}

/// 集計結果の取得
impl WordCounter<'_> {
    /// Occurrence count of a text, 0 if never counted
    #[inline]
    pub fn count(&self, text: &str) -> u64 {
        self.words.get(text).map_or(0, |entry| entry.count)
    }

    pub fn entry(&self, text: &str) -> Option<&WordEntry> {
        self.words.get(text)
    }

    pub fn entries(&self) -> impl Iterator<Item = &WordEntry> {
        self.words.values()
    }

    /// Number of distinct counted texts
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of tokens passed to the counter, including filtered ones
    pub fn seen(&self) -> u64 {
        self.seen
    }

    /// Sum of all counts
    pub fn total_count(&self) -> u64 {
        self.words.values().map(|entry| entry.count).sum()
    }

    /// The `k` most frequent words, count descending then text ascending
    /// Returns every word when fewer than `k` exist.
    ///
    /// # Arguments
    /// * `k` - result limit
    pub fn top_k(&self, k: usize) -> Vec<RankedWord> {
        let mut heap: BinaryHeap<Ranked> = self.words.values().map(Ranked).collect();
        let mut ranking = Vec::with_capacity(k.min(heap.len()));
        while ranking.len() < k {
            let Some(Ranked(entry)) = heap.pop() else {
                break;
            };
            ranking.push(RankedWord::from(entry));
        }
        ranking
    }

    /// Top `count` words as configured in the options
    pub fn into_ranking(self) -> Vec<RankedWord> {
        self.top_k(self.options.count)
    }
}
