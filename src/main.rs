use clap::Parser;
use small_calc::utils::{logger, validation::Validate};
use small_calc::{CliConfig, LineTokenReader, Session};
use std::io;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 驗證配置
    if let Err(e) = cli.validate() {
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Check the file passed with --config, or run without it");
            std::process::exit(1);
        }
    };

    logger::init_cli_logger(
        cli.verbose,
        config.logging.format,
        config.logging.level.as_deref(),
    );

    tracing::info!("Starting small-calc");
    if cli.verbose {
        tracing::debug!("Resolved config: {:?}", config);
    }

    let input = LineTokenReader::new(io::stdin().lock());
    let session = Session::new(input, io::stdout().lock(), &config.session);

    match session.run() {
        Ok(summary) => {
            tracing::debug!("Session summary: {:?}", summary);
            Ok(())
        }
        Err(e) => {
            tracing::error!("❌ Session aborted: {}", e);
            Err(e.into())
        }
    }
}
