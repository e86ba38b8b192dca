//! This crate is a word frequency analyzer built on a dictionary based segmenter.
pub mod analysis;
pub mod cli;
pub mod dictionary;
pub mod error;
pub mod logging;
pub mod ranking;
pub mod segment;
pub mod session;

/// Token
/// A segmented unit of text produced by a `Segmenter`.
/// It holds:
/// - The token text
/// - The part of speech tag
/// - The frequency of the word in the dictionary corpus (0 if the word is unknown)
pub use segment::Token;

/// Segmenter Trait
/// The capability boundary to the word segmentation engine.
/// A segmenter is loaded once and is read only afterwards, so it must be
/// `Send + Sync` to be shared by the worker threads of an analysis batch.
///
/// `JiebaSegmenter` is the provided implementation, built on `jieba-rs`
/// and loaded from a `Dictionary`.
pub use segment::{jieba::JiebaSegmenter, Segmenter};

/// Dictionary
/// Entries of the form `text frequency [tag]` merged from one or more sources.
/// A source name is resolved as a file on disk first and as a bundled
/// dictionary second.
pub use dictionary::{Dictionary, DictionaryEntry, DictionarySource};

/// Frequency Ranker
/// `WordCounter` filters tokens by part of speech tag and minimum dictionary
/// frequency, counts the survivors per text, and extracts the top K words
/// through a max-heap.
///
/// Ranking order:
/// - occurrence count, descending
/// - text, ascending (tie-break)
///
/// `RankOptions` carries the tag allow-set (`TagSet`), the frequency threshold
/// and K.
pub use ranking::{rank, RankOptions, RankedWord, TagSet, WordCounter, WordEntry};

/// Analyzer
/// Runs one ranking invocation over a batch of files.
/// An unreadable file aborts the whole batch, no partial ranking is returned.
pub use analysis::Analyzer;

/// Interactive Session
/// Reads comma separated file paths line by line and prints one ranking per
/// line until an empty line.
/// The segmenter is loaded in the background through `DeferredSegmenter` and
/// joined once, before the first batch.
pub use session::{DeferredSegmenter, OutputFormat, Session, SessionSummary};

/// Error type of this crate
pub use error::{MagnifierError, Result};
