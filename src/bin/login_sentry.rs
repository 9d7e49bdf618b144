use std::io::{self, Write};
use std::path::PathBuf;

use structopt::StructOpt;

use login_sentry::config::Config;
use login_sentry::detection::LogProcessor;
use login_sentry::input::{HttpFetcher, UrlParts};
use login_sentry::lookup::load_lookup;

/// Scan an authentication log for possible intrusion attempts
#[derive(StructOpt, Debug)]
#[structopt(name = "login-sentry", about = "Auth-log intrusion detection")]
struct Cli {
    /// URL of the log file to scan
    url: Option<String>,

    /// Path to a TOML configuration file
    #[structopt(short, long)]
    config: Option<PathBuf>,

    /// Write the default configuration to this path and exit
    #[structopt(long)]
    write_config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let cli = Cli::from_args();

    if let Some(path) = cli.write_config {
        let config = Config::default();
        config.to_file(&path)?;
        println!("Default configuration written to: {:?}", path);
        return Ok(());
    }

    let url = match cli.url {
        Some(url) => url,
        None => {
            println!("Specify URL from where logs are to be obtained.");
            std::process::exit(1);
        }
    };

    // An explicitly requested config file must exist; otherwise defaults.
    let config = match cli.config {
        Some(path) => Config::from_file(&path)?,
        None => Config::default(),
    };

    let banned_ips = load_lookup(&config.lookups.banned_ips)?;
    let authorized_users = load_lookup(&config.lookups.authorized_users)?;
    log::info!(
        "Loaded {} banned IP(s) and {} authorized user(s)",
        banned_ips.len(),
        authorized_users.len()
    );

    let parts = UrlParts::parse(&url)?;
    let fetcher = HttpFetcher::new(&config.fetch);
    let body = fetcher.fetch(&parts)?;

    let mut processor = LogProcessor::new(banned_ips, authorized_users, config.detection);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let summary = processor.run(body, &mut out)?;
    writeln!(
        out,
        "Processed {} lines. Found {} possible hacking attempts.",
        summary.lines, summary.hacks
    )?;

    Ok(())
}
