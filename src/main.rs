use clap::Parser;
use tipsplit::utils::{logger, validation::Validate};
use tipsplit::{CliConfig, InteractiveSession, OneShotSession, Settings, TomlConfig};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting tipsplit CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let defaults_file = match &config.defaults {
        Some(path) => match TomlConfig::from_file(path).and_then(|f| {
            f.validate()?;
            Ok(f)
        }) {
            Ok(file) => {
                tracing::debug!("Loaded defaults file: {}", path);
                Some(file)
            }
            Err(e) => {
                tracing::error!("❌ Could not load defaults file '{}': {}", path, e);
                eprintln!("❌ {}", e.user_friendly_message());
                eprintln!("💡 {}", e.recovery_suggestion());
                std::process::exit(1);
            }
        },
        None => None,
    };

    let settings = Settings::resolve(&config, defaults_file.as_ref());

    let result = if config.interactive {
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        let session = InteractiveSession::new(stdin.lock(), stdout.lock(), settings);
        session.run(config.bill.as_deref(), config.tip, config.split)
    } else {
        let session = OneShotSession::new(settings, config.json);
        session
            .run(config.bill.as_deref(), config.tip, config.split)
            .map(|output| {
                println!("{}", output);
            })
    };

    if let Err(e) = result {
        tracing::error!(
            "❌ Session failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            tipsplit::utils::error::ErrorSeverity::Low => 0,
            tipsplit::utils::error::ErrorSeverity::Medium => 2,
            tipsplit::utils::error::ErrorSeverity::High => 1,
            tipsplit::utils::error::ErrorSeverity::Critical => 3,
        };

        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}
