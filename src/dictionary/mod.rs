pub mod bundled;

use std::{fs::File, io::{BufRead, BufReader}, path::PathBuf, time::Instant};

use indexmap::IndexMap;

use crate::error::{MagnifierError, Result};

/// Default dictionary source, resolved on disk first and then among the bundled dictionaries
pub const DEFAULT_DICTIONARY: &str = "data/dictionary.txt";

/// One dictionary line: `text frequency [tag]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryEntry {
    pub text: String,
    pub frequency: u64,
    /// empty when the line has no tag
    pub tag: String,
}

impl DictionaryEntry {
    /// Parse a dictionary line
    /// Returns `None` for lines with fewer than two fields or a non integer frequency.
    pub fn parse(line: &str) -> Option<Self> {
        let mut fields = line.split_whitespace();
        let text = fields.next()?;
        let frequency = fields.next()?.parse::<u64>().ok()?;
        let tag = fields.next().unwrap_or("");
        Some(Self {
            text: text.to_string(),
            frequency,
            tag: tag.to_string(),
        })
    }
}

/// Where a dictionary is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionarySource {
    File(PathBuf),
    Bundled { name: &'static str, data: &'static str },
}

impl DictionarySource {
    /// Resolve a dictionary name
    /// An existing regular file wins over a bundled dictionary of the same name.
    ///
    /// # Arguments
    /// * `name` - file path or bundled dictionary name
    pub fn resolve(name: &str) -> Result<Self> {
        let path = PathBuf::from(name);
        if path.is_file() {
            log::info!("dictionary file found: {}", path.display());
            return Ok(Self::File(path));
        }
        match bundled::lookup(name) {
            Some((name, data)) => {
                log::info!("built in dictionary: {}", name);
                Ok(Self::Bundled { name, data })
            }
            None => {
                let known = bundled::names().collect::<Vec<_>>().join(", ");
                log::debug!("{} is neither a file nor one of: {}", name, known);
                Err(MagnifierError::DictionaryNotFound {
                    source_name: name.to_string(),
                })
            }
        }
    }

    pub fn name(&self) -> String {
        match self {
            Self::File(path) => path.display().to_string(),
            Self::Bundled { name, .. } => name.to_string(),
        }
    }
}

/// Word dictionary merged from one or more sources
/// Later sources override earlier entries for the same text.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    entries: IndexMap<String, DictionaryEntry>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Load and merge every named source in order
    /// Fails on the first source that cannot be found or read.
    ///
    /// # Arguments
    /// * `names` - dictionary file paths or bundled dictionary names
    pub fn load_sources<T>(names: &[T]) -> Result<Self>
    where
        T: AsRef<str>,
    {
        let start = Instant::now();
        let mut dictionary = Self::new();
        for name in names {
            let source = DictionarySource::resolve(name.as_ref())?;
            dictionary.load_source(&source)?;
        }
        log::info!(
            "loaded {} dictionary words from {} source(s) in {:.2}ms",
            dictionary.len(),
            names.len(),
            start.elapsed().as_secs_f64() * 1000.0
        );
        Ok(dictionary)
    }

    /// Read one resolved source into the dictionary
    ///
    /// # Returns
    /// * `usize` - number of entries read from the source
    pub fn load_source(&mut self, source: &DictionarySource) -> Result<usize> {
        match source {
            DictionarySource::File(path) => {
                let file = File::open(path).map_err(|e| MagnifierError::DictionaryIo {
                    source_name: source.name(),
                    source: e,
                })?;
                self.parse_into(&source.name(), BufReader::new(file))
            }
            DictionarySource::Bundled { name, data } => self.parse_into(name, data.as_bytes()),
        }
    }

    /// Parse dictionary lines from a reader
    /// Malformed lines are skipped with a warning.
    ///
    /// # Arguments
    /// * `source_name` - name used in log and error messages
    /// * `reader` - dictionary content
    ///
    /// # Returns
    /// * `usize` - number of entries read
    pub fn parse_into<R: BufRead>(&mut self, source_name: &str, reader: R) -> Result<usize> {
        let mut loaded = 0usize;
        for (idx, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| MagnifierError::DictionaryIo {
                source_name: source_name.to_string(),
                source: e,
            })?;
            let line = line.trim_start_matches('\u{feff}');
            if line.trim().is_empty() {
                continue;
            }
            match DictionaryEntry::parse(line) {
                Some(entry) => {
                    self.insert(entry);
                    loaded += 1;
                }
                None => {
                    log::warn!("{}:{}: malformed dictionary line skipped", source_name, idx + 1)
                }
            }
        }
        log::debug!("{}: {} entries", source_name, loaded);
        Ok(loaded)
    }

    pub fn insert(&mut self, entry: DictionaryEntry) {
        self.entries.insert(entry.text.clone(), entry);
    }

    pub fn get(&self, text: &str) -> Option<&DictionaryEntry> {
        self.entries.get(text)
    }

    pub fn entries(&self) -> impl Iterator<Item = &DictionaryEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
