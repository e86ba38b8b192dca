pub mod jieba;

/// A segmented unit of text
/// Borrows its text from the segmented document and its tag from the segmenter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token<'a> {
    text: &'a str,
    tag: &'a str,
    frequency: u64,
}

impl<'a> Token<'a> {
    /// Create a new token
    ///
    /// # Arguments
    /// * `text` - token text
    /// * `tag` - part of speech tag
    /// * `frequency` - frequency of the word in the dictionary corpus (0 if unknown)
    pub fn new(text: &'a str, tag: &'a str, frequency: u64) -> Self {
        Self { text, tag, frequency }
    }

    #[inline]
    pub fn text(&self) -> &'a str {
        self.text
    }

    #[inline]
    pub fn tag(&self) -> &'a str {
        self.tag
    }

    #[inline]
    pub fn frequency(&self) -> u64 {
        self.frequency
    }
}

/// Word segmentation engine
///
/// A segmenter is loaded once and then only read, so it can be shared
/// between the worker threads of an analysis batch.
pub trait Segmenter: Send + Sync {
    /// Split `text` into a lazy sequence of tagged tokens
    fn segment<'a>(&'a self, text: &'a str) -> impl Iterator<Item = Token<'a>> + 'a;

    /// Segment raw document bytes
    /// Invalid UTF-8 sequences are skipped, each valid run is segmented on its own.
    fn segment_bytes<'a>(&'a self, bytes: &'a [u8]) -> Vec<Token<'a>> {
        match std::str::from_utf8(bytes) {
            Ok(text) => self.segment(text).collect(),
            Err(_) => {
                log::warn!("document is not valid utf-8, invalid sequences are skipped");
                // トークンが元のバイト列を借用できないため有効な区間ごとに分割する
                bytes
                    .utf8_chunks()
                    .flat_map(|chunk| self.segment(chunk.valid()))
                    .collect()
            }
        }
    }
}

impl<S: Segmenter> Segmenter for &S {
    fn segment<'a>(&'a self, text: &'a str) -> impl Iterator<Item = Token<'a>> + 'a {
        (**self).segment(text)
    }
}
