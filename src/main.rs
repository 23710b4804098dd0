//! Recite command-line entrypoint.
//!
//! Reads text from a file or stdin, runs one library operation, and prints JSON.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;
use serde::Serialize;

use recite::config::Config;
use recite::constants::DEFAULT_MAX_GENERATED_PAIRS;
use recite::extract::{
    ExtractionReport, QaPair, generate_pairs_from_text, sanitize_generated_pairs,
};
use recite::normalize::{clean_block, clean_line, clean_math_output, sanitize_similar_text};
use recite::scoring::score_alignment;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Debug, Parser)]
#[command(name = "recite", version, about = "Structure Q&A text and grade spoken answers")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Extract question/answer pairs from notes.
    Parse {
        /// Input file; stdin when omitted or `-`.
        input: Option<PathBuf>,
        /// Include which strategy produced the pairs.
        #[arg(long)]
        report: bool,
        /// Turn sentences into prompts when no pairs are found.
        #[arg(long)]
        fallback: bool,
    },
    /// Sanitize a generator's `{"questions": [...]}` reply.
    Generated { input: Option<PathBuf> },
    /// Align a spoken answer against the expected text.
    Align {
        #[arg(long)]
        expected: String,
        /// Spoken text; read from stdin when omitted.
        #[arg(long)]
        spoken: Option<String>,
        /// Compare word-by-word by position instead of greedy matching.
        #[arg(long)]
        positional: bool,
    },
    /// Align and score a spoken answer.
    Score {
        #[arg(long)]
        expected: String,
        #[arg(long)]
        spoken: Option<String>,
        /// Relevance judged elsewhere, 0-100.
        #[arg(long, default_value_t = 0)]
        relevance: i64,
    },
    /// Check whether a candidate text is too close to a reference.
    Similarity {
        #[arg(long)]
        reference: String,
        #[arg(long)]
        candidate: String,
    },
    /// Normalize text.
    Clean {
        input: Option<PathBuf>,
        /// Treat the input as a single line.
        #[arg(long, conflicts_with_all = ["math", "similar"])]
        line: bool,
        /// Strip LaTeX markup from model output.
        #[arg(long, conflicts_with = "similar")]
        math: bool,
        /// Drop worked solutions from generated practice problems.
        #[arg(long)]
        similar: bool,
    },
}

#[derive(Serialize)]
struct ParseOutput {
    pairs: Vec<QaPair>,
    report: ExtractionReport,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?;

    tracing::debug!(%config, "Recite configuration loaded");

    run(cli.command, &config)
}

fn run(command: Command, config: &Config) -> anyhow::Result<()> {
    match command {
        Command::Parse {
            input,
            report,
            fallback,
        } => {
            let raw = read_input(input.as_deref())?;
            let (mut pairs, extraction) = config.qa_extractor().extract_with_report(&raw);

            if fallback && pairs.is_empty() {
                pairs = generate_pairs_from_text(&raw, DEFAULT_MAX_GENERATED_PAIRS);
                tracing::info!(pairs = pairs.len(), "No markers found, generated prompts");
            }

            tracing::info!(
                strategy = %extraction.strategy,
                pairs = extraction.pair_count,
                "Parsed Q&A pairs"
            );

            if report {
                print_json(&ParseOutput {
                    pairs,
                    report: extraction,
                })
            } else {
                print_json(&pairs)
            }
        }
        Command::Generated { input } => {
            let reply = read_input(input.as_deref())?;
            let pairs =
                sanitize_generated_pairs(&reply).context("generator reply is not usable")?;
            print_json(&pairs)
        }
        Command::Align {
            expected,
            spoken,
            positional,
        } => {
            let spoken = spoken_or_stdin(spoken)?;
            let aligner = config.word_aligner();
            let result = if positional {
                aligner.align_positional(&expected, &spoken)
            } else {
                aligner.align(&expected, &spoken)
            };

            tracing::info!(summary = %result.summary(), "Aligned answer");
            print_json(&result)
        }
        Command::Score {
            expected,
            spoken,
            relevance,
        } => {
            let spoken = spoken_or_stdin(spoken)?;
            let alignment = config.word_aligner().align(&expected, &spoken);
            let score = score_alignment(&alignment, relevance);

            tracing::info!(%score, "Scored answer");
            print_json(&score)
        }
        Command::Similarity {
            reference,
            candidate,
        } => print_json(&config.similarity_gate().evaluate(&reference, &candidate)),
        Command::Clean {
            input,
            line,
            math,
            similar,
        } => {
            let raw = read_input(input.as_deref())?;
            let cleaned = if math {
                clean_math_output(&raw)
            } else if similar {
                sanitize_similar_text(&raw)
            } else if line {
                clean_line(&raw)
            } else {
                clean_block(&raw)
            };
            println!("{}", cleaned);
            Ok(())
        }
    }
}

/// Reads the whole file, or stdin for `None` and `-`.
fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn spoken_or_stdin(spoken: Option<String>) -> anyhow::Result<String> {
    match spoken {
        Some(spoken) => Ok(spoken),
        None => read_input(None),
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
