// Entrypoint for the CLI application.
// - Opens the log file, loads `.env`, and hands the real environment,
//   HTTP transport constructor and stdout to `cli::run`.

use std::io::Write;
use std::path::Path;
use std::process;

use notion_register::{api::HttpTransport, cli, config, logging};

fn main() -> anyhow::Result<()> {
    logging::init(Path::new(logging::LOG_FILE))?;
    config::load_env_file(Path::new(config::ENV_FILE));

    let args: Vec<String> = std::env::args().collect();
    let mut stdout = std::io::stdout().lock();
    let outcome = cli::run(
        &args,
        |key| std::env::var(key).ok(),
        HttpTransport::new,
        &mut stdout,
    )?;
    stdout.flush()?;

    process::exit(outcome.exit_code());
}
