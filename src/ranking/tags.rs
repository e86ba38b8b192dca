use std::collections::HashSet;

/// Default allow-list: noun flavoured tags
pub const DEFAULT_TAGS: &str = "nz,ng,nt,nr,nrfg,n,ns,nrt";

/// Part of speech tags the segmenter dictionary may emit
pub const KNOWN_TAGS: &[&str] = &[
    "tg", "l", "ng", "t", "mq", "e", "ag", "an", "h", "ug", "ns", "n", "c", "uz", "vg", "r",
    "vq", "f", "p", "dg", "g", "k", "vd", "m", "zg", "uv", "s", "z", "nrt", "uj", "rz", "ud",
    "nt", "rg", "nrfg", "i", "df", "ad", "v", "q", "vi", "rr", "nz", "o", "mg", "u", "j", "ul",
    "nr", "a", "vn", "b", "d", "y",
];

/// Allow-set of part of speech tags
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TagSet {
    tags: HashSet<String>,
}

impl TagSet {
    /// Parse a comma separated tag list
    /// Surrounding whitespace is trimmed and empty items are ignored.
    ///
    /// # Arguments
    /// * `list` - e.g. `"n,ns,nr"`
    pub fn parse(list: &str) -> Self {
        list.split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .collect()
    }

    #[inline]
    pub fn contains(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    /// Tags outside of `KNOWN_TAGS`, sorted
    /// They are still honoured, they just never match a known dictionary tag.
    pub fn unknown_tags(&self) -> Vec<&str> {
        let mut unknown: Vec<&str> = self
            .tags
            .iter()
            .map(String::as_str)
            .filter(|tag| !KNOWN_TAGS.contains(tag))
            .collect();
        unknown.sort_unstable();
        unknown
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

impl<T: Into<String>> FromIterator<T> for TagSet {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            tags: iter.into_iter().map(Into::into).collect(),
        }
    }
}
