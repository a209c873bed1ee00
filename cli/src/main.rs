use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tagdex_search::{Autocomplete, MatchPolicy, SearchConfig, current_term};

#[derive(Parser)]
#[command(name = "tagdex", about = "Page through tag autocomplete matches")]
struct Cli {
    /// Tag table: one tag per line, `name,images,alias,alias,...`.
    table: PathBuf,

    /// Text typed into the search box; the last comma-separated term is queried.
    query: String,

    /// Match only names and aliases starting with the query.
    #[arg(long)]
    match_start: bool,

    /// Maximum number of pages to print.
    #[arg(long, default_value_t = 1)]
    pages: usize,

    /// TOML search config (page size, alias matches per tag).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Fail on the first malformed row instead of skipping it.
    #[arg(long)]
    strict: bool,

    /// Print each page as the raw JSON array.
    #[arg(long)]
    raw: bool,

    /// Log at debug level (overridden by RUST_LOG).
    #[arg(long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    let config = match &cli.config {
        Some(path) => SearchConfig::load(path)
            .with_context(|| format!("reading config {}", path.display()))?,
        None => SearchConfig::default(),
    };
    for problem in config.validate() {
        tracing::warn!(%problem, "invalid config value, using default");
    }

    let table = std::fs::read_to_string(&cli.table)
        .with_context(|| format!("reading tag table {}", cli.table.display()))?;
    let match_start = i32::from(cli.match_start || config.policy == MatchPolicy::Prefix);

    let mut engine = Autocomplete::new(config);
    if cli.strict {
        let tags = engine
            .load_strict(&table, match_start)
            .with_context(|| format!("loading {}", cli.table.display()))?;
        eprintln!("loaded {tags} tags");
    } else {
        let report = engine.load(&table, match_start);
        eprintln!(
            "loaded {} tags ({} malformed rows skipped, {} blank)",
            report.tags, report.dropped_rows, report.blank_rows
        );
    }

    let query = current_term(&cli.query);
    let policy = engine.config().policy;

    for index in 0..cli.pages {
        let page = engine.query(&query, index == 0);
        if page.is_empty() {
            break;
        }

        if cli.raw {
            println!("{}", page.to_json()?);
        } else {
            println!("-- page {} --", index + 1);
            for m in page.iter() {
                let shown = match m.highlight(&query, policy) {
                    Some(h) => format!("{}[{}]{}", h.before, h.matched, h.after),
                    None => m.matched_text().to_string(),
                };
                match m.aliased_tag {
                    Some(_) => println!("{shown} -> {}\t{}", m.name, m.images),
                    None => println!("{shown}\t{}", m.images),
                }
            }
        }

        if page.is_exhausted() {
            break;
        }
    }

    Ok(())
}
