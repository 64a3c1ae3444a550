use clap::Parser;
use gofest::app::commands;
use gofest::config::cli::Command;
use gofest::utils::error::ErrorSeverity;
use gofest::utils::{logger, validation::Validate};
use gofest::{CliConfig, FestError, HttpFestivalSource, Settings};

async fn run(config: &CliConfig, settings: &Settings) -> gofest::Result<()> {
    let mut stdout = std::io::stdout().lock();

    match &config.command {
        Command::List(args) => {
            let source = HttpFestivalSource::new(settings)?;
            let total = commands::list(
                source,
                settings.page_size,
                args.to_request(),
                settings.format,
                &mut stdout,
            )
            .await?;
            tracing::info!("Listed {} festivals", total);
        }
        Command::Filters(args) => {
            let source = HttpFestivalSource::new(settings)?;
            commands::filters(
                source,
                settings.page_size,
                args.kind,
                args.pages,
                settings.format,
                &mut stdout,
            )
            .await?;
        }
        Command::Show { id } => {
            let source = HttpFestivalSource::new(settings)?;
            commands::show(&source, id, settings.format, &mut stdout).await?;
        }
        Command::Map => commands::map(&settings.base_url, &settings.dataset, &mut stdout)?,
    }
    Ok(())
}

fn exit_code(e: &FestError) -> i32 {
    match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

fn report(e: &FestError) {
    tracing::error!(
        "❌ gofest failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
}

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    let settings = match config.resolve() {
        Ok(settings) => settings,
        Err(e) => {
            report(&e);
            std::process::exit(exit_code(&e).max(1));
        }
    };

    if let Err(e) = settings.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }
    tracing::debug!("Effective settings: {:?}", settings);

    if let Err(e) = run(&config, &settings).await {
        report(&e);
        let code = exit_code(&e);
        if code > 0 {
            std::process::exit(code);
        }
    }
}
