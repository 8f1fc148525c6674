use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use titleguard::api::{CheckTitleRequest, check_duplicate, get_matching_titles};
use titleguard::{ApiError, MatchConfig, StaticSource, TitleGuardConfig, TitleMatcher};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "titleguard")]
#[command(about = "Find duplicate and near-duplicate titles in a corpus snapshot")]
#[command(version, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print similar title groups across the whole corpus
    Report(ReportArgs),

    /// Check one title for exact duplicates (JSON response)
    Check(CheckArgs),

    /// List existing titles containing a fragment (JSON response)
    Search(SearchArgs),
}

#[derive(Args)]
struct CorpusArgs {
    /// Corpus JSON file: {"content": [...], "terms": [...]}
    #[arg(long)]
    corpus: PathBuf,

    /// YAML detector configuration
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Args)]
struct ReportArgs {
    #[command(flatten)]
    input: CorpusArgs,
}

#[derive(Args)]
struct CheckArgs {
    #[command(flatten)]
    input: CorpusArgs,

    /// Title to check
    #[arg(long)]
    title: String,

    /// Id of the item being edited; excluded from the check
    #[arg(long)]
    exclude_id: Option<u64>,
}

#[derive(Args)]
struct SearchArgs {
    #[command(flatten)]
    input: CorpusArgs,

    /// Fragment to search for
    #[arg(long)]
    fragment: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Report(args) => report_run(args),
        Commands::Check(args) => check_run(args),
        Commands::Search(args) => search_run(args),
    }
}

fn report_run(args: ReportArgs) -> Result<()> {
    let (matcher, source) = load(&args.input)?;
    let corpus = matcher.load_corpus(&source)?;
    print!("{}", matcher.report(&corpus));
    Ok(())
}

fn check_run(args: CheckArgs) -> Result<()> {
    let (matcher, source) = load(&args.input)?;
    let corpus = matcher.load_corpus(&source)?;

    let mut req = CheckTitleRequest::new(args.title);
    req.post_id = args.exclude_id;

    match check_duplicate(&matcher, &corpus, &req) {
        Ok(resp) => {
            println!("{}", serde_json::to_string_pretty(&resp)?);
            Ok(())
        }
        Err(err) => reject(err),
    }
}

fn search_run(args: SearchArgs) -> Result<()> {
    let (matcher, source) = load(&args.input)?;
    let corpus = matcher.load_corpus(&source)?;

    let req = CheckTitleRequest::new(args.fragment);
    match get_matching_titles(&matcher, &corpus, &req) {
        Ok(resp) => {
            println!("{}", serde_json::to_string_pretty(&resp)?);
            Ok(())
        }
        Err(err) => reject(err),
    }
}

/// Print the structured error body, then fail so the exit status is non-zero.
fn reject(err: ApiError) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&err)?);
    Err(err.into())
}

fn load(input: &CorpusArgs) -> Result<(TitleMatcher, StaticSource)> {
    let cfg = match &input.config {
        Some(path) => TitleGuardConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?
            .into_match_config()?,
        None => MatchConfig::default(),
    };
    let matcher = TitleMatcher::new(cfg)?;
    let source = read_corpus(&input.corpus)?;
    Ok((matcher, source))
}

fn read_corpus(path: &Path) -> Result<StaticSource> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading corpus {}", path.display()))?;
    let source: StaticSource = serde_json::from_str(&raw)
        .with_context(|| format!("parsing corpus {}", path.display()))?;
    debug!(
        path = %path.display(),
        content = source.content.len(),
        terms = source.terms.len(),
        "corpus_read"
    );
    Ok(source)
}
