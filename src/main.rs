use chrono::{DateTime, Utc};
use clap::Parser;
use session_finder::core::report;
use session_finder::domain::ports::ReportSink;
use session_finder::utils::{logger, validation::Validate};
use session_finder::{CliConfig, FinderEngine, HttpSessionSource, LocalStorage};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting session-finder");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let criteria = config.criteria();
    let source = HttpSessionSource::new(config.sessions_endpoint.clone());
    let engine = FinderEngine::new(source);

    // With --include-past, the upcoming cutoff moves to the epoch floor so
    // nothing is dropped by date.
    let cutoff: DateTime<Utc> = if config.include_past {
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

    match config.format.as_str() {
        "csv" => {
            let rendered = report::render_csv(&matches)?;
            let storage = LocalStorage::new(config.output_path.clone());
            storage.write_report("sessions.csv", rendered.as_bytes()).await?;
            println!("✅ Wrote {} sessions to {}/sessions.csv", matches.len(), config.output_path);
        }
        "json" => {
            let rendered = report::render_json(&matches)?;
            let storage = LocalStorage::new(config.output_path.clone());
            storage.write_report("sessions.json", rendered.as_bytes()).await?;
            println!("✅ Wrote {} sessions to {}/sessions.json", matches.len(), config.output_path);
        }
        _ => {
            println!("{}", report::render_table(&matches));
        }
    }

    Ok(())
}
