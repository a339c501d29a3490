// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Two subcommands: `inspect` and `vectorize`. Both share the
// corpus options in CorpusArgs.

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::application::featurize_use_case::FeaturizeConfig;
use crate::data::vectorizer::BowMode;
use crate::data::vocab_builder::VocabOrder;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Summarise a corpus: examples, vocabulary size, label counts
    Inspect(InspectArgs),

    /// Vectorise one piece of text against a corpus vocabulary
    Vectorize(VectorizeArgs),
}

/// Options shared by every subcommand
#[derive(Args, Debug)]
pub struct CorpusArgs {
    /// Tab-separated corpus file (`<text>\t<label>` per line)
    #[arg(long)]
    pub corpus: Option<String>,

    /// JSON config file; flags given on the command line override it
    #[arg(long)]
    pub config: Option<String>,

    /// What each vector slot records
    #[arg(long, value_enum)]
    pub mode: Option<BowMode>,

    /// Shorthand for `--mode binary`
    #[arg(long, conflicts_with = "mode")]
    pub binary: bool,

    /// How vocabulary indices are assigned
    #[arg(long, value_enum)]
    pub order: Option<VocabOrder>,

    /// Lowercase every token (`--lowercase false` keeps the casing)
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub lowercase: Option<bool>,

    /// Trim punctuation from the edges of each token
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub strip_punctuation: Option<bool>,

    /// HuggingFace tokenizer.json to use instead of whitespace splitting
    #[arg(long)]
    pub tokenizer: Option<String>,
}

impl CorpusArgs {
    /// Build the application config: the --config file (or defaults)
    /// with command line flags applied on top.
    pub fn into_config(self) -> Result<FeaturizeConfig> {
        let mut cfg = match &self.config {
            Some(path) => FeaturizeConfig::from_json_file(path)?,
            None => FeaturizeConfig::default(),
        };

        if let Some(corpus) = self.corpus {
            cfg.corpus = corpus;
        }
        if let Some(mode) = self.mode {
            cfg.mode = mode;
        }
        if self.binary {
            cfg.mode = BowMode::Binary;
        }
        if let Some(order) = self.order {
            cfg.vocab_order = order;
        }
        if let Some(lowercase) = self.lowercase {
            cfg.lowercase = lowercase;
        }
        if let Some(strip) = self.strip_punctuation {
            cfg.strip_punctuation = strip;
        }
        if self.tokenizer.is_some() {
            cfg.tokenizer = self.tokenizer;
        }
        Ok(cfg)
    }
}

#[derive(Args, Debug)]
pub struct InspectArgs {
    #[command(flatten)]
    pub corpus: CorpusArgs,

    /// Also list the vocabulary, one `index<TAB>word` per line
    #[arg(long)]
    pub show_vocab: bool,
}

#[derive(Args, Debug)]
pub struct VectorizeArgs {
    #[command(flatten)]
    pub corpus: CorpusArgs,

    /// Text to vectorise
    #[arg(long)]
    pub text: String,
}
