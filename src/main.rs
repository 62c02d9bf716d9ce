use anyhow::Result;
use clap::Parser;
use markpane::cli::{self, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // CLI --log-level flag takes highest precedence, then RUST_LOG, then config (applied below).
    markpane::debug::init_log_bridge(cli.log_level);

    let config = cli::load_config(&cli)?;
    markpane::debug::apply_config_level(config.log_level);
    log::debug!("Using session file {:?}", config.session_path());

    match cli::run(&cli, &config) {
        Ok(0) => Ok(()),
        // Non-zero exit without an error (e.g. `validate` on a bad layout)
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("markpane: error: {e:#}");
            std::process::exit(1);
        }
    }
}
