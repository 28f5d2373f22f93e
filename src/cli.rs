// Command driver: turns `<program> <title>` into one registration call
// and reports the result on the given writer.

use std::io::{self, Write};

use crate::api::{NotionClient, Transport};
use crate::config::Config;

pub const USAGE: &str = "Usage: notion-register <TITLE>";

/// How an invocation ended. Only `Registered` maps to exit code 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Registered,
    Usage,
    ConfigError,
    Failed,
}

impl Outcome {
    pub fn exit_code(self) -> i32 {
        match self {
            Outcome::Registered => 0,
            Outcome::Usage | Outcome::ConfigError | Outcome::Failed => 1,
        }
    }
}

/// Run one invocation. `args` includes the program name, `lookup` reads
/// configuration values, `connect` builds the transport and `out`
/// receives the user-facing messages.
///
/// Configuration is checked before anything else: when it is incomplete
/// nothing is written to `out` and `connect` is never called.
pub fn run<T, C, F, W>(args: &[String], lookup: F, connect: C, out: &mut W) -> io::Result<Outcome>
where
    T: Transport,
    C: FnOnce() -> anyhow::Result<T>,
    F: Fn(&str) -> Option<String>,
    W: Write,
{
    let config = match Config::from_lookup(lookup) {
        Ok(config) => config,
        Err(err) => {
            log::error!("Error: {}", err);
            return Ok(Outcome::ConfigError);
        }
    };

    let title = match args.get(1) {
        Some(title) => title,
        None => {
            writeln!(out, "{}", USAGE)?;
            return Ok(Outcome::Usage);
        }
    };

    let transport = match connect() {
        Ok(transport) => transport,
        Err(err) => {
            log::error!("Error registering record: {:#}", err);
            writeln!(out, "Error: {:#}", err)?;
            return Ok(Outcome::Failed);
        }
    };

    let client = NotionClient::with_transport(transport, &config);
    match client.register_record(&config.database_id, title) {
        Ok(()) => {
            log::debug!("registered record {:?}", title);
            writeln!(out, "Successfully registered: {}", title)?;
            Ok(Outcome::Registered)
        }
        Err(err) => {
            log::error!("Error registering record: {}", err);
            writeln!(out, "Error: {}", err)?;
            Ok(Outcome::Failed)
        }
    }
}
