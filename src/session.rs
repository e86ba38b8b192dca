use std::{
    io::{BufRead, Write},
    path::PathBuf,
    thread::{self, JoinHandle},
};

use clap::ValueEnum;

use crate::{
    analysis::Analyzer,
    error::{MagnifierError, Result},
    ranking::{RankOptions, RankedWord},
    segment::Segmenter,
};

/// How a ranking is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// `text/tag` pairs separated by spaces
    #[default]
    Text,
    /// one JSON array per batch
    Json,
}

impl OutputFormat {
    /// Write one ranking as a single newline terminated line
    pub fn write_ranking<W: Write>(&self, out: &mut W, ranking: &[RankedWord]) -> Result<()> {
        match self {
            Self::Text => {
                let line = ranking
                    .iter()
                    .map(RankedWord::to_string)
                    .collect::<Vec<_>>()
                    .join(" ");
                writeln!(out, "{}", line)?;
            }
            Self::Json => {
                serde_json::to_writer(&mut *out, ranking).map_err(std::io::Error::from)?;
                writeln!(out)?;
            }
        }
        out.flush()?;
        Ok(())
    }
}

/// A segmenter that is still loading on a background thread
///
/// `wait` joins the loader the first time it is called and hands out the
/// loaded segmenter afterwards.
pub struct DeferredSegmenter<S> {
    handle: Option<JoinHandle<Result<S>>>,
    segmenter: Option<S>,
}

impl<S: Send + 'static> DeferredSegmenter<S> {
    /// Start loading on a new thread
    pub fn spawn<F>(load: F) -> Self
    where
        F: FnOnce() -> Result<S> + Send + 'static,
    {
        Self {
            handle: Some(thread::spawn(load)),
            segmenter: None,
        }
    }

    /// Wrap an already loaded segmenter
    pub fn ready(segmenter: S) -> Self {
        Self {
            handle: None,
            segmenter: Some(segmenter),
        }
    }

    /// Block until the loader finished
    /// A failed or panicked loader makes this and every later call fail.
    pub fn wait(&mut self) -> Result<&S> {
        if let Some(handle) = self.handle.take() {
            let loaded = handle.join().map_err(|_| MagnifierError::SegmenterUnavailable {
                reason: "dictionary loader panicked".to_string(),
            })??;
            self.segmenter = Some(loaded);
        }
        self.segmenter
            .as_ref()
            .ok_or_else(|| MagnifierError::SegmenterUnavailable {
                reason: "dictionary loading failed".to_string(),
            })
    }

    /// True while the loader has not been joined
    pub fn is_pending(&self) -> bool {
        self.handle.is_some()
    }
}

/// Split an input line into file paths
/// Pieces are trimmed and empty pieces dropped.
pub fn parse_paths(line: &str) -> Vec<PathBuf> {
    line.split(',')
        .map(str::trim)
        .filter(|path| !path.is_empty())
        .map(PathBuf::from)
        .collect()
}

/// Counters of a finished session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// batches that printed a ranking
    pub analysed: usize,
    /// batches aborted by a read error
    pub failed: usize,
}

/// Interactive loop reading comma separated file paths
pub struct Session<S> {
    segmenter: DeferredSegmenter<S>,
    options: RankOptions,
    format: OutputFormat,
    prompt: Option<String>,
}

impl<S: Segmenter + 'static> Session<S> {
    pub fn new(segmenter: DeferredSegmenter<S>, options: RankOptions, format: OutputFormat) -> Self {
        Self {
            segmenter,
            options,
            format,
            prompt: None,
        }
    }

    /// Print `prompt` on stderr before reading each line
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    /// Run until an empty line or end of input
    ///
    /// Read errors abort only the current batch. A segmenter that failed to
    /// load ends the session with an error, even if no batch was run.
    ///
    /// # Arguments
    /// * `input` - path lines
    /// * `output` - rankings, one line per batch
    pub fn run<R, W>(self, mut input: R, mut output: W) -> Result<SessionSummary>
    where
        R: BufRead,
        W: Write,
    {
        let Self {
            mut segmenter,
            options,
            format,
            prompt,
        } = self;
        let mut summary = SessionSummary::default();

        loop {
            if let Some(prompt) = &prompt {
                eprint!("{}", prompt);
                std::io::stderr().flush()?;
            }
            let mut line = String::new();
            let read = input.read_line(&mut line)?;
            if read == 0 || line.trim().is_empty() {
                break;
            }
            let paths = parse_paths(&line);
            if paths.is_empty() {
                log::warn!("no file in input line");
                continue;
            }

            // 初回のみ辞書ロードの完了を待つ
            let analyzer = Analyzer::new(segmenter.wait()?, options.clone());
            match analyzer.analyze_files(&paths) {
                Ok(ranking) => {
                    format.write_ranking(&mut output, &ranking)?;
                    summary.analysed += 1;
                }
                Err(e @ MagnifierError::ReadFile { .. }) => {
                    log::error!("{}", e);
                    summary.failed += 1;
                }
                Err(e) => return Err(e),
            }
        }

        if segmenter.is_pending() {
            segmenter.wait()?;
        }
        Ok(summary)
    }
}
