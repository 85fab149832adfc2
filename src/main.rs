use clap::Parser;
use std::error::Error;
use std::io;
use subnet_calc::config::{self, Config};
use subnet_calc::lookup::{IpInfoClient, SystemResolver};
use subnet_calc::session::{run_interactive, run_once, SessionOptions};
use subnet_calc::Calculator;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    if let Err(e) = log4rs::init_file(config::LOG_CONFIG_FILE, Default::default()) {
        eprintln!("Logging disabled, could not load {}: {e}", config::LOG_CONFIG_FILE);
    }
    let config = Config::parse();
    log::info!("#Start main() {:?}", config);

    if config.no_color {
        colored::control::set_override(false);
    }

    let resolver = SystemResolver::new(config.dns_timeout());
    let locator = IpInfoClient::new(&config.geo_url, config.geo_timeout())?;
    let calc = Calculator::new(resolver, locator);

    let mut stdout = io::stdout();
    match config.input.as_deref() {
        Some(input) => {
            let options = SessionOptions {
                clear_screen: false,
                json: config.json,
            };
            if !run_once(&calc, input, &mut stdout, &options).await? {
                std::process::exit(1);
            }
        }
        None => {
            let options = SessionOptions {
                clear_screen: !config.no_clear,
                json: config.json,
            };
            run_interactive(&calc, io::stdin().lock(), &mut stdout, &options).await?;
        }
    }

    Ok(())
}
