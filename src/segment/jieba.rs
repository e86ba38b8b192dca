use std::collections::HashMap;

use jieba_rs::Jieba;

use crate::{dictionary::Dictionary, segment::{Segmenter, Token}};

/// Dictionary based segmenter backed by `jieba-rs`
///
/// Segmentation is dictionary-only maximum probability cutting, the HMM
/// model for unknown words is not used.
pub struct JiebaSegmenter {
    jieba: Jieba,
    frequencies: HashMap<String, u64>,
}

impl JiebaSegmenter {
    /// Build a segmenter from a loaded dictionary
    ///
    /// # Arguments
    /// * `dictionary` - dictionary entries to register
    pub fn load(dictionary: &Dictionary) -> Self {
        let mut jieba = Jieba::empty();
        let mut frequencies = HashMap::with_capacity(dictionary.len());
        // jieba は全単語の頻度を usize で合計するので溢れないように丸める
        let mut total = 0usize;
        for entry in dictionary.entries() {
            let requested = usize::try_from(entry.frequency).unwrap_or(usize::MAX);
            let freq = requested.min(usize::MAX - total);
            if freq < requested {
                log::warn!("frequency of {} clamped to {}", entry.text, freq);
            }
            total += freq;
            jieba.add_word(&entry.text, Some(freq), Some(&entry.tag));
            frequencies.insert(entry.text.clone(), entry.frequency);
        }
        log::debug!("segmenter ready with {} words", frequencies.len());
        Self { jieba, frequencies }
    }

    /// Dictionary frequency of a word, 0 when the word is unknown
    #[inline]
    pub fn frequency(&self, word: &str) -> u64 {
        self.frequencies.get(word).copied().unwrap_or(0)
    }

    /// Number of dictionary words known to the segmenter
    pub fn word_count(&self) -> usize {
        self.frequencies.len()
    }
}

impl Segmenter for JiebaSegmenter {
    fn segment<'a>(&'a self, text: &'a str) -> impl Iterator<Item = Token<'a>> + 'a {
        self.jieba
            .tag(text, false)
            .into_iter()
            .filter(|tag| !tag.word.trim().is_empty())
            .map(move |tag| Token::new(tag.word, tag.tag, self.frequency(tag.word)))
    }
}
