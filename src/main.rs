mod config;
mod db;
mod error;
mod extract;
mod quiz;

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, warn};

use config::{is_valid_placeholder, Config};
use error::QuizError;
use extract::PdfExtractor;
use quiz::lang::RuleAnalyzer;
use quiz::questions::{MaskMode, QuestionGenerator};
use quiz::{Outcome, Pipeline, QuizRequest};

#[derive(Parser)]
#[command(name = "quizgen", about = "Fill-in-the-blank quiz generator for PDF documents")]
struct Cli {
    /// Debug-level logging (RUST_LOG still wins)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// SQLite file for cached runs [env: QUIZGEN_DB]
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate questions from a page range of a PDF
    Generate {
        /// PDF file to read
        file: PathBuf,
        /// First page (1-based, inclusive)
        #[arg(long = "from", default_value = "1")]
        page_from: u32,
        /// Last page (inclusive)
        #[arg(long = "to")]
        page_to: u32,
        /// Total marks to spread across the questions
        #[arg(short, long)]
        marks: u32,
        /// Fix the noun selection for reproducible output
        #[arg(long)]
        seed: Option<u64>,
        /// Masking mode: token or first-match
        #[arg(long)]
        mask: Option<MaskMode>,
        /// Minimum sentence length, exclusive [env: QUIZGEN_MIN_TOKENS]
        #[arg(long)]
        min_tokens: Option<usize>,
        /// Blank marker [env: QUIZGEN_PLACEHOLDER]
        #[arg(long)]
        placeholder: Option<String>,
        /// Print the masked words after the questions
        #[arg(long)]
        answers: bool,
        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,
        /// Neither read nor write the run cache
        #[arg(long)]
        no_cache: bool,
    },
    /// List cached runs, newest first
    History {
        /// Max rows to display
        #[arg(short = 'n', long, default_value = "20")]
        limit: usize,
    },
    /// Delete all cached runs
    Clear,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let t0 = Instant::now();
    let mut config = Config::from_env();
    if let Some(db) = cli.db {
        config.db_path = db;
    }

    let result = match cli.command {
        Commands::Generate {
            file,
            page_from,
            page_to,
            marks,
            seed,
            mask,
            min_tokens,
            placeholder,
            answers,
            json,
            no_cache,
        } => {
            if let Some(m) = mask {
                config.mask_mode = m;
            }
            if let Some(n) = min_tokens {
                config.min_tokens = n;
            }
            if let Some(p) = placeholder {
                config.placeholder = p;
            }
            let request = QuizRequest {
                document: file,
                page_from,
                page_to,
                total_marks: marks,
            };
            let outcome = generate(&config, &request, seed, !no_cache)?;
            print_outcome(&outcome, answers, json)?;
            Ok(if outcome.is_success() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Commands::History { limit } => {
            let conn = db::connect(&config.db_path)?;
            db::init_schema(&conn)?;
            let rows = db::fetch_history(&conn, limit)?;
            if rows.is_empty() {
                println!("No cached runs.");
                return Ok(ExitCode::SUCCESS);
            }

            println!(
                "{:>3} | {:<32} | {:>9} | {:>5} | {:<6} | {:>9} | {:<20}",
                "#", "Document", "Pages", "Marks", "Status", "Questions", "Created"
            );
            println!("{}", "-".repeat(103));
            for (i, r) in rows.iter().enumerate() {
                let pages = format!("{}-{}", r.page_from, r.page_to);
                let status = if r.succeeded { "ok" } else { "failed" };
                println!(
                    "{:>3} | {:<32} | {:>9} | {:>5} | {:<6} | {:>9} | {:<20}",
                    i + 1,
                    truncate(&r.document, 32),
                    pages,
                    r.total_marks,
                    status,
                    r.question_count,
                    truncate(&r.created_at, 19)
                );
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Clear => {
            let conn = db::connect(&config.db_path)?;
            db::init_schema(&conn)?;
            let removed = db::clear_outcomes(&conn)?;
            println!("Removed {} cached runs.", removed);
            Ok(ExitCode::SUCCESS)
        }
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        eprintln!("\nDone in {}", format_duration(elapsed));
    }

    result
}

fn generate(
    config: &Config,
    request: &QuizRequest,
    seed: Option<u64>,
    use_cache: bool,
) -> Result<Outcome> {
    if !extract::is_allowed_file(&request.document) {
        bail!("Allowed file types are PDFs: {}", request.document.display());
    }
    if !is_valid_placeholder(&config.placeholder) {
        bail!(
            "Placeholder must be non-blank and contain no letters or digits: {:?}",
            config.placeholder
        );
    }

    let cache = if use_cache {
        let digest = match db::document_digest(&request.document) {
            Ok(d) => d,
            Err(e) => {
                let e = QuizError::from(e);
                warn!("Pipeline failed for {}: {}", request.document.display(), e);
                return Ok(Outcome::Failed {
                    message: e.to_string(),
                });
            }
        };
        let conn = db::connect(&config.db_path)?;
        db::init_schema(&conn)?;
        let key = run_key(config, request, digest);
        // A seed asks for a specific draw, so only unseeded runs reuse cached output.
        if seed.is_none() {
            if let Some(outcome) = db::lookup_outcome(&conn, &key)? {
                info!("Using cached outcome for {}", request.document.display());
                return Ok(outcome);
            }
        }
        Some((conn, key))
    } else {
        None
    };

    let analyzer = RuleAnalyzer::new();
    let generator = QuestionGenerator::new(&config.placeholder, config.mask_mode);
    let pipeline = Pipeline {
        extractor: &PdfExtractor,
        analyzer: &analyzer,
        generator: &generator,
        min_tokens: config.min_tokens,
    };
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg} [{elapsed}]")?);
    pb.set_message(format!("Reading {}", request.document.display()));
    pb.enable_steady_tick(Duration::from_millis(100));
    let outcome = pipeline.run(request, &mut rng);
    pb.finish_and_clear();

    if let Some((conn, key)) = cache {
        let document = request.document.display().to_string();
        db::save_outcome(&conn, &key, &document, &outcome)?;
    }
    Ok(outcome)
}

fn run_key(config: &Config, request: &QuizRequest, digest: String) -> db::RunKey {
    db::RunKey {
        digest,
        page_from: request.page_from,
        page_to: request.page_to,
        total_marks: request.total_marks,
        mask_mode: config.mask_mode,
        min_tokens: config.min_tokens,
        placeholder: config.placeholder.clone(),
    }
}

fn print_outcome(outcome: &Outcome, answers: bool, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(outcome)?);
        return Ok(());
    }

    match outcome {
        Outcome::Failed { message } => {
            eprintln!("Failed: {}", message);
        }
        Outcome::Succeeded {
            questions,
            total_marks,
        } => {
            for q in questions {
                let unit = if q.marks == 1 { "mark" } else { "marks" };
                println!("{:>3}. [{} {}] {}", q.number, q.marks, unit, q.text);
            }
            println!("\n{} questions | total marks: {}", questions.len(), total_marks);

            if answers {
                println!("\n--- Answers ---");
                for q in questions {
                    println!("{:>3}. {}", q.number, q.answer);
                }
            }
        }
    }
    Ok(())
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max).collect();
        format!("{}...", truncated)
    }
}

fn format_duration(d: Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    }
}
