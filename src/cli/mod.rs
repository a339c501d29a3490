// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Parses arguments with clap and prints results. All work is
// delegated to Layer 2 (application).
//
//   1. `inspect`   — corpus summary
//   2. `vectorize` — one text as a bag-of-words vector

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, InspectArgs, VectorizeArgs};

use crate::application::featurize_use_case::FeaturizeUseCase;
use crate::data::vectorizer::non_zero;

#[derive(Parser, Debug)]
#[command(
    name = "sentiment-bow",
    version,
    about = "Turn a tab-separated sentiment corpus into bag-of-words vectors."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Dispatch to the subcommand handler
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Inspect(args)   => run_inspect(args),
            Commands::Vectorize(args) => run_vectorize(args),
        }
    }
}

fn run_inspect(args: InspectArgs) -> Result<()> {
    let use_case = FeaturizeUseCase::new(args.corpus.into_config()?)?;
    let report   = use_case.execute()?;

    println!("corpus:          {}", use_case.config().corpus);
    println!("examples:        {}", report.examples.len());
    println!("vocabulary size: {}", report.vocab.len());
    println!("mode:            {:?}", use_case.config().mode);
    println!("mean active:     {:.2}", report.mean_active_features());
    println!("labels:");
    for (label, count) in report.label_counts() {
        println!("  {label:>6}  {count}");
    }

    if args.show_vocab {
        println!("vocabulary:");
        for (word, index) in report.vocab.iter() {
            println!("{index}\t{word}");
        }
    }
    Ok(())
}

fn run_vectorize(args: VectorizeArgs) -> Result<()> {
    let use_case = FeaturizeUseCase::new(args.corpus.into_config()?)?;
    let report   = use_case.execute()?;

    let vector = use_case.vectorize_text(&args.text, &report.vocab)?;
    tracing::debug!("Vectorised {} chars into {} slots", args.text.len(), vector.len());

    println!("length: {}", vector.len());
    for (index, value) in non_zero(&vector) {
        // index always comes from this vocabulary
        let word = report.vocab.word(index).unwrap_or("?");
        println!("{word}={value}");
    }
    Ok(())
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::vectorizer::BowMode;
    use crate::data::vocab_builder::VocabOrder;
    use std::io::Write;

    fn corpus(contents: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        f
    }

    #[test]
    fn test_parses_inspect_flags() {
        let cli = Cli::try_parse_from([
            "sentiment-bow", "inspect",
            "--corpus", "train.tsv",
            "--binary",
            "--order", "sorted",
            "--strip-punctuation",
            "--show-vocab",
        ])
        .unwrap();

        let Commands::Inspect(args) = cli.command else {
            panic!("expected inspect");
        };
        assert!(args.show_vocab);

        let cfg = args.corpus.into_config().unwrap();
        assert_eq!(cfg.corpus, "train.tsv");
        assert_eq!(cfg.mode, BowMode::Binary);
        assert_eq!(cfg.vocab_order, VocabOrder::Lexicographic);
        assert!(cfg.strip_punctuation);
    }

    #[test]
    fn test_parses_vectorize_flags() {
        let cli = Cli::try_parse_from([
            "sentiment-bow", "vectorize",
            "--corpus", "train.tsv",
            "--text", "good movie",
            "--mode", "count",
            "--order", "first-seen",
            "--lowercase", "false",
        ])
        .unwrap();

        let Commands::Vectorize(args) = cli.command else {
            panic!("expected vectorize");
        };
        assert_eq!(args.text, "good movie");

        let cfg = args.corpus.into_config().unwrap();
        assert_eq!(cfg.mode, BowMode::Count);
        assert_eq!(cfg.vocab_order, VocabOrder::FirstSeen);
        assert!(!cfg.lowercase);
    }

    #[test]
    fn test_rejects_unknown_order_and_conflicting_mode() {
        assert!(Cli::try_parse_from(["sentiment-bow", "inspect", "--order", "random"]).is_err());
        assert!(Cli::try_parse_from([
            "sentiment-bow", "inspect", "--binary", "--mode", "count",
        ])
        .is_err());
    }

    #[test]
    fn test_vectorize_requires_text() {
        assert!(Cli::try_parse_from(["sentiment-bow", "vectorize", "--corpus", "x.tsv"]).is_err());
    }

    #[test]
    fn test_run_inspect_and_vectorize() {
        let f    = corpus("good movie\t1\nbad movie\t0\n");
        let path = f.path().display().to_string();

        let inspect = Cli::try_parse_from([
            "sentiment-bow", "inspect", "--corpus", path.as_str(), "--show-vocab",
        ])
        .unwrap();
        inspect.run().unwrap();

        let vectorize = Cli::try_parse_from([
            "sentiment-bow", "vectorize", "--corpus", path.as_str(), "--text", "good good film",
        ])
        .unwrap();
        vectorize.run().unwrap();
    }

    #[test]
    fn test_run_fails_on_bad_corpus() {
        let f    = corpus("no separator here\n");
        let path = f.path().display().to_string();

        let cli = Cli::try_parse_from(["sentiment-bow", "inspect", "--corpus", path.as_str()]).unwrap();
        assert!(cli.run().is_err());
    }
}
