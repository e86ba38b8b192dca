use std::{
    io::{self, IsTerminal},
    process::{self, ExitCode},
    time::Instant,
};

use anyhow::Context;
use clap::Parser;
use magnifier::{
    cli::{AnalysisArgs, Cli, Command},
    logging, DeferredSegmenter, Dictionary, JiebaSegmenter, Session,
};

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(e) = logging::init(cli.log_level) {
        eprintln!("[error] logger setup failed: {}", e);
        return ExitCode::FAILURE;
    }

    let result = match cli.command {
        Command::Analysis(args) => run_analysis(args),
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[error] {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_analysis(args: AnalysisArgs) -> anyhow::Result<()> {
    let options = args.rank_options();
    let unknown = options.tags.unknown_tags();
    if !unknown.is_empty() {
        log::warn!("unknown flag(s) will never match: {}", unknown.join(","));
    }

    // 辞書はプロンプト表示中にバックグラウンドでロードする
    let dictionaries = args.dictionaries();
    let segmenter = DeferredSegmenter::spawn(move || {
        let start = Instant::now();
        let dictionary = match Dictionary::load_sources(&dictionaries) {
            Ok(dictionary) => dictionary,
            Err(e) => {
                // 入力待ちのまま残らないようにその場で終了する
                eprintln!("[error] dictionary loading failed: {}", e);
                process::exit(1);
            }
        };
        let segmenter = JiebaSegmenter::load(&dictionary);
        log::info!("segmenter loaded in {:.2}ms", start.elapsed().as_secs_f64() * 1000.0);
        Ok(segmenter)
    });

    let mut session = Session::new(segmenter, options, args.format);
    let stdin = io::stdin();
    if stdin.is_terminal() {
        session = session.with_prompt("> ");
    }
    let summary = session
        .run(stdin.lock(), io::stdout().lock())
        .context("analysis session aborted")?;
    log::debug!("session finished: {} analysed, {} failed", summary.analysed, summary.failed);
    Ok(())
}
