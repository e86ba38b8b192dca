use std::{fs, io::Cursor, path::Path};

use magnifier::{
    Analyzer, DeferredSegmenter, Dictionary, JiebaSegmenter, MagnifierError, OutputFormat,
    RankOptions, RankedWord, Segmenter, Session, SessionSummary, TagSet, Token,
};

/// `text/tag/frequency` words separated by whitespace
struct SlashSegmenter;

impl Segmenter for SlashSegmenter {
    fn segment<'a>(&'a self, text: &'a str) -> impl Iterator<Item = Token<'a>> + 'a {
        text.split_whitespace().filter_map(|word| {
            let mut parts = word.split('/');
            let text = parts.next()?;
            let tag = parts.next()?;
            let frequency = parts.next().and_then(|f| f.parse().ok()).unwrap_or(0);
            Some(Token::new(text, tag, frequency))
        })
    }
}

fn write(dir: &Path, name: &str, content: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path.to_str().unwrap().to_string()
}

fn run_session<S: Segmenter + 'static>(
    segmenter: DeferredSegmenter<S>,
    options: RankOptions,
    format: OutputFormat,
    input: &str,
) -> (magnifier::Result<SessionSummary>, String) {
    let mut output = Vec::new();
    let result = Session::new(segmenter, options, format).run(Cursor::new(input.to_string()), &mut output);
    (result, String::from_utf8(output).unwrap())
}

#[test]
fn jieba_ranks_nouns_across_files() {
    let dir = tempfile::tempdir().unwrap();
    let a = write(dir.path(), "a.txt", "北京是中国的城市。");
    let b = write(dir.path(), "b.txt", "上海也是中国的城市。");

    let dictionary = Dictionary::load_sources(&["data/dictionary.txt"]).unwrap();
    let analyzer = Analyzer::new(JiebaSegmenter::load(&dictionary), RankOptions::new(TagSet::parse("n,ns"), 0, 2));
    let ranking = analyzer.analyze_files(&[a.clone(), b.clone()]).unwrap();
    assert_eq!(
        ranking,
        vec![RankedWord::new("中国", "ns", 2), RankedWord::new("城市", "n", 2)]
    );

    // same batch, same result
    assert_eq!(analyzer.analyze_files(&[a, b]).unwrap(), ranking);
}

#[test]
fn jieba_min_frequency_filters_rare_words() {
    let dir = tempfile::tempdir().unwrap();
    let a = write(dir.path(), "a.txt", "北京天安门");

    let dictionary = Dictionary::load_sources(&["data/dictionary.txt"]).unwrap();
    let analyzer = Analyzer::new(JiebaSegmenter::load(&dictionary), RankOptions::new(TagSet::parse("ns"), 2000, 5));
    let ranking = analyzer.analyze_files(&[a]).unwrap();
    assert_eq!(ranking, vec![RankedWord::new("北京", "ns", 1)]);
}

#[test]
fn session_prints_one_line_per_batch() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "a.txt", "dog/n/5 cat/n/3 dog/n/5 run/v/5");
    write(dir.path(), "b.txt", "cat/n/3 cat/n/3");
    let a = dir.path().join("a.txt");
    let b = dir.path().join("b.txt");
    let missing = dir.path().join("missing.txt");

    let input = format!(
        "{}\n{} , {}\n{},{}\n\n{}\n",
        a.display(),
        a.display(),
        b.display(),
        a.display(),
        missing.display(),
        a.display(),
    );
    let (result, output) = run_session(
        DeferredSegmenter::ready(SlashSegmenter),
        RankOptions::new(TagSet::parse("n"), 0, 1),
        OutputFormat::Text,
        &input,
    );
    assert_eq!(result.unwrap(), SessionSummary { analysed: 2, failed: 1 });
    assert_eq!(output, "dog/n\ncat/n\n");
}

#[test]
fn session_joins_background_loader() {
    let dir = tempfile::tempdir().unwrap();
    let a = write(dir.path(), "a.txt", "dog/n/5 cat/n/3 dog/n/5 run/v/5");

    let loader = DeferredSegmenter::spawn(|| {
        std::thread::sleep(std::time::Duration::from_millis(20));
        Ok(SlashSegmenter)
    });
    let (result, output) = run_session(
        loader,
        RankOptions::new(TagSet::parse("n,v"), 0, 10),
        OutputFormat::Text,
        &format!("{}\n", a),
    );
    assert_eq!(result.unwrap().analysed, 1);
    assert_eq!(output, "dog/n cat/n run/v\n");
}

#[test]
fn session_json_output() {
    let dir = tempfile::tempdir().unwrap();
    let a = write(dir.path(), "a.txt", "dog/n/5 cat/n/3 dog/n/5");

    let (result, output) = run_session(
        DeferredSegmenter::ready(SlashSegmenter),
        RankOptions::new(TagSet::parse("n"), 0, 5),
        OutputFormat::Json,
        &format!("{}\n", a),
    );
    result.unwrap();
    let ranking: Vec<RankedWord> = serde_json::from_str(output.trim_end()).unwrap();
    assert_eq!(ranking, vec![RankedWord::new("dog", "n", 2), RankedWord::new("cat", "n", 1)]);
}

#[test]
fn empty_ranking_prints_empty_line() {
    let dir = tempfile::tempdir().unwrap();
    let a = write(dir.path(), "a.txt", "run/v/5");

    let (result, output) = run_session(
        DeferredSegmenter::ready(SlashSegmenter),
        RankOptions::new(TagSet::parse("n"), 0, 5),
        OutputFormat::Text,
        &format!("{}\n", a),
    );
    assert_eq!(result.unwrap().analysed, 1);
    assert_eq!(output, "\n");
}

#[test]
fn dictionary_failure_is_fatal_even_without_batches() {
    let loader = DeferredSegmenter::spawn(|| {
        let dictionary = Dictionary::load_sources(&["no/such/dictionary.txt"])?;
        Ok(JiebaSegmenter::load(&dictionary))
    });
    let (result, output) = run_session(loader, RankOptions::default(), OutputFormat::Text, "\n");
    assert!(matches!(result, Err(MagnifierError::DictionaryNotFound { .. })));
    assert!(output.is_empty());
}

#[test]
fn dictionary_failure_stops_first_batch() {
    let dir = tempfile::tempdir().unwrap();
    let a = write(dir.path(), "a.txt", "北京");

    let loader = DeferredSegmenter::spawn(|| {
        let dictionary = Dictionary::load_sources(&["no/such/dictionary.txt"])?;
        Ok(JiebaSegmenter::load(&dictionary))
    });
    let (result, output) = run_session(loader, RankOptions::default(), OutputFormat::Text, &format!("{}\n{}\n", a, a));
    assert!(result.is_err());
    assert!(output.is_empty());
}

#[test]
fn panicking_loader_makes_segmenter_unavailable() {
    let mut loader = DeferredSegmenter::<SlashSegmenter>::spawn(|| panic!("loader crashed"));
    assert!(matches!(
        loader.wait(),
        Err(MagnifierError::SegmenterUnavailable { .. })
    ));
    assert!(!loader.is_pending());
    // 二回目以降も失敗のまま
    assert!(matches!(
        loader.wait(),
        Err(MagnifierError::SegmenterUnavailable { .. })
    ));
}

#[test]
fn panicking_loader_ends_session_with_error() {
    let loader = DeferredSegmenter::<SlashSegmenter>::spawn(|| panic!("loader crashed"));
    let (result, output) = run_session(loader, RankOptions::default(), OutputFormat::Text, "\n");
    assert!(matches!(result, Err(MagnifierError::SegmenterUnavailable { .. })));
    assert!(output.is_empty());
}

#[test]
fn prompt_goes_to_stderr_not_output() {
    let dir = tempfile::tempdir().unwrap();
    let a = write(dir.path(), "a.txt", "dog/n/5 cat/n/3 dog/n/5");

    let mut output = Vec::new();
    let summary = Session::new(
        DeferredSegmenter::ready(SlashSegmenter),
        RankOptions::new(TagSet::parse("n"), 0, 5),
        OutputFormat::Text,
    )
    .with_prompt("> ")
    .run(Cursor::new(format!("{}\n\n", a)), &mut output)
    .unwrap();
    assert_eq!(summary.analysed, 1);
    assert_eq!(String::from_utf8(output).unwrap(), "dog/n cat/n\n");
}
