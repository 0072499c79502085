use chrono::{DateTime, Utc};
use clap::Parser;
use session_finder::config::toml_config::TomlConfig;
use session_finder::core::report;
use session_finder::domain::ports::{ConfigProvider, ReportSink};
use session_finder::utils::{logger, validation::Validate};
use session_finder::{FinderEngine, HttpSessionSource, LocalStorage};

/// Runs a saved search described by a TOML file, so recurring lookups
/// ("STEM within 10 miles of home") don't need the full flag set each time.
#[derive(Parser)]
#[command(name = "saved-search")]
#[command(about = "Run a session search from a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "finder.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Show the search that would run without fetching anything
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);

    tracing::info!("Loading configuration from: {}", args.config);
    let config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            std::process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    display_search_summary(&config);

    if args.dry_run {
        println!("Dry run: not fetching sessions.");
        return Ok(());
    }

    let criteria = config.criteria();
    let source = match config.source.timeout_seconds {
        Some(seconds) => HttpSessionSource::with_timeout(
            config.sessions_endpoint().to_string(),
            std::time::Duration::from_secs(seconds),
        ),
        None => HttpSessionSource::new(config.sessions_endpoint().to_string()),
    };
    let engine = FinderEngine::new(source);

    let cutoff: DateTime<Utc> = if config.include_past() {
        DateTime::<Utc>::MIN_UTC
    } else {
        Utc::now()
    };

    let matches = match engine.run_at(&criteria, cutoff).await {
        Ok(matches) => matches,
        Err(e) => {
            tracing::error!("Session search failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    if matches.is_empty() {
        println!("No sessions matched the search.");
        return Ok(());
    }

    match config.format() {
        "csv" => {
            let rendered = report::render_csv(&matches)?;
            let storage = LocalStorage::new(config.output_path().to_string());
            storage.write_report("sessions.csv", rendered.as_bytes()).await?;
            println!(
                "✅ Wrote {} sessions to {}/sessions.csv",
                matches.len(),
                config.output_path()
            );
        }
        "json" => {
            let rendered = report::render_json(&matches)?;
            let storage = LocalStorage::new(config.output_path().to_string());
            storage.write_report("sessions.json", rendered.as_bytes()).await?;
            println!(
                "✅ Wrote {} sessions to {}/sessions.json",
                matches.len(),
                config.output_path()
            );
        }
        _ => {
            println!("{}", report::render_table(&matches));
        }
    }

    Ok(())
}

fn display_search_summary(config: &TomlConfig) {
    println!("Search: {}", config.finder.name);
    if let Some(description) = &config.finder.description {
        println!("  {}", description);
    }
    println!("  Source: {}", config.sessions_endpoint());

    let criteria = config.criteria();
    if !criteria.query.is_empty() {
        println!("  Query: {}", criteria.query);
    }
    if let Some(coordinate) = criteria.user_coordinate {
        println!(
            "  Within {} mi of ({}, {})",
            criteria.radius_miles, coordinate.latitude, coordinate.longitude
        );
    }
    println!("  Output: {} ({})", config.output_path(), config.format());
    println!();
}
