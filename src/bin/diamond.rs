use clap::Parser;
use small_calc::config::validate_diamond_size;
use small_calc::core::diamond::read_size;
use small_calc::utils::logger::{self, LogFormat};
use small_calc::utils::validation::Validate;
use small_calc::{render_hollow_diamond, DiamondConfig, LineTokenReader};
use std::io::{self, Write};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = DiamondConfig::parse();

    logger::init_cli_logger(config.verbose, LogFormat::Compact, None);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let size = match config.size {
        Some(size) => size,
        None => {
            let mut input = LineTokenReader::new(io::stdin().lock());
            match read_size(&mut input, &mut io::stdout().lock()) {
                Ok(size) => size,
                Err(e) => {
                    eprintln!("❌ {}", e.user_friendly_message());
                    std::process::exit(1);
                }
            }
        }
    };

    if let Err(e) = validate_diamond_size(size) {
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    tracing::debug!("Rendering diamond of size {} with {:?}", size, config.fill);
    // validated to 1..=100 above
    let diamond = render_hollow_diamond(size as usize, config.fill);

    let mut stdout = io::stdout().lock();
    stdout.write_all(diamond.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
