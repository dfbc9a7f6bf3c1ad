use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::debug;

use rs_markov_core::model::corpus_model::{CorpusModel, ModelConfig};
use rs_markov_core::model::generation_input::GenerationInput;
use rs_markov_core::model::generator::SentenceGenerator;

/// Command line for the Markov sentence generator.
///
/// The capacity flags expose the model's compiled-in defaults; exceeding
/// them degrades the model rather than failing, so they are safe to lower
/// for experiments.
#[derive(Parser)]
#[command(name = "rs-markov")]
#[command(about = "Generates sentences from a text corpus with a first-order Markov chain")]
struct Cli {
    /// Corpus text file to learn from
    corpus: PathBuf,

    /// Maximum number of distinct tokens kept in the dictionary
    #[arg(long, default_value_t = ModelConfig::default().max_tokens)]
    max_tokens: usize,

    /// Maximum number of successors tracked per token
    #[arg(long, default_value_t = ModelConfig::default().max_successors)]
    max_successors: usize,

    /// Byte budget of a generated sentence
    #[arg(long, default_value_t = GenerationInput::default().max_sentence_len)]
    max_sentence_len: usize,

    /// Attempts before giving up on a terminator-constrained sentence
    #[arg(long, default_value_t = GenerationInput::default().max_attempts)]
    max_attempts: usize,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = ModelConfig {
        max_tokens: cli.max_tokens,
        max_successors: cli.max_successors,
    };
    let model = CorpusModel::from_file(&cli.corpus, config)?;
    debug!("corpus model ready: {} distinct tokens", model.token_count());

    let generator = SentenceGenerator::new(&model);
    let input = GenerationInput {
        max_sentence_len: cli.max_sentence_len,
        max_attempts: cli.max_attempts,
    };

    // One question, one exclamation, separated by a blank line
    let question = generator.generate_ending_with('?', &input)?;
    let exclamation = generator.generate_ending_with('!', &input)?;

    println!("{question}");
    println!();
    println!("{exclamation}");

    Ok(())
}
