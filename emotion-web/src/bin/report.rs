//! Relatório de linha de comando: lê reviews de um CSV e mostra, para cada uma,
//! a polaridade calculada e a emoção predominante ao lado do sentimento real.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use emotion_core::{
    corpus::{demo_reviews, load_reviews},
    evaluation::evaluate,
};
use emotion_web::{init_tracing, load_pipeline};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "emotion-report")]
#[command(about = "Predominant emotion and polarity for a CSV of reviews")]
#[command(version)]
struct Args {
    /// CSV with `review` and `sentiment` columns (default: built-in demo reviews)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Maximum number of reviews to process
    #[arg(short, long, default_value_t = 10)]
    limit: usize,

    /// Lexicon JSON file (default: built-in lexicon)
    #[arg(long)]
    lexicon: Option<PathBuf>,

    /// Print one JSON object per review instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let pipeline = load_pipeline(args.lexicon.as_deref())?;

    let records = match &args.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("abrindo {}", path.display()))?;
            load_reviews(BufReader::new(file), Some(args.limit))
                .with_context(|| format!("lendo reviews de {}", path.display()))?
        }
        None => demo_reviews().into_iter().take(args.limit).collect(),
    };
    info!("{} review(s) para analisar", records.len());

    let results = pipeline.analyze_batch(&records);

    for (record, result) in records.iter().zip(&results) {
        match result {
            Ok(analysis) if args.json => {
                println!("{}", serde_json::to_string(analysis)?);
            }
            Ok(analysis) => {
                println!("\n{}", "-".repeat(73));
                println!("{}", record.text);
                println!("{}", analysis.polarity);
                println!("{} (real polarity: {})", analysis.emotion, record.sentiment);
                println!("{}", "-".repeat(73));
            }
            Err(err) if args.json => {
                println!("{}", serde_json::json!({ "review": record.text, "error": err.to_string() }));
            }
            Err(err) => {
                println!("\n{}\nerro: {}", record.text, err);
            }
        }
    }

    let evaluation = evaluate(&results);
    info!(
        "Concordância com o sentimento real: {}/{} ({:.1}%), {} indecisa(s), {} falha(s)",
        evaluation.agreed,
        evaluation.evaluated,
        evaluation.accuracy() * 100.0,
        evaluation.undecided,
        evaluation.failed
    );
    Ok(())
}
