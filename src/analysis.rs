use std::{fs, path::Path, time::Instant};

use rayon::prelude::*;

use crate::{
    error::{MagnifierError, Result},
    ranking::{RankOptions, RankedWord, WordCounter},
    segment::{Segmenter, Token},
};

/// Runs ranking invocations over batches of documents
///
/// Each invocation starts from an empty counter; only the segmenter is
/// shared between invocations.
pub struct Analyzer<S> {
    segmenter: S,
    options: RankOptions,
}

impl<S: Segmenter> Analyzer<S> {
    pub fn new(segmenter: S, options: RankOptions) -> Self {
        Self { segmenter, options }
    }

    /// Rank the words of a batch of files
    /// A file that cannot be read aborts the whole batch.
    ///
    /// # Arguments
    /// * `paths` - files to analyse
    ///
    /// # Returns
    /// * `Vec<RankedWord>` - top words over all files
    pub fn analyze_files<P>(&self, paths: &[P]) -> Result<Vec<RankedWord>>
    where
        P: AsRef<Path> + Sync,
    {
        let start = Instant::now();
        let documents = read_documents(paths)?;
        let read_ms = start.elapsed().as_secs_f64() * 1000.0;
        let ranking = self.analyze_documents(&documents);
        log::debug!(
            "[time] read={:.2}ms total={:.2}ms files={}",
            read_ms,
            start.elapsed().as_secs_f64() * 1000.0,
            paths.len()
        );
        Ok(ranking)
    }

    /// Rank the words of documents already in memory
    pub fn analyze_documents<D>(&self, documents: &[D]) -> Vec<RankedWord>
    where
        D: AsRef<[u8]> + Sync,
    {
        // 分かち書きは並列、集計は入力順 (最初に出現した品詞を採用するため)
        let tokenized: Vec<Vec<Token>> = documents
            .par_iter()
            .map(|doc| self.segmenter.segment_bytes(doc.as_ref()))
            .collect();

        let mut counter = WordCounter::new(&self.options);
        for tokens in tokenized {
            counter.add_tokens(tokens);
        }
        log::info!(
            "tokens={} counted={} distinct={}",
            counter.seen(),
            counter.total_count(),
            counter.len()
        );
        counter.into_ranking()
    }
}

/// Read every file fully
/// The error of the first failing path, in input order, is returned.
pub fn read_documents<P>(paths: &[P]) -> Result<Vec<Vec<u8>>>
where
    P: AsRef<Path> + Sync,
{
    let results: Vec<Result<Vec<u8>>> = paths
        .par_iter()
        .map(|path| {
            let path = path.as_ref();
            fs::read(path).map_err(|e| MagnifierError::ReadFile {
                path: path.to_path_buf(),
                source: e,
            })
        })
        .collect();
    results.into_iter().collect()
}
