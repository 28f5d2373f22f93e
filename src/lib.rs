// Library root
// -----------
// The binary (`main.rs`) only wires real resources into `cli::run`; all
// behavior lives here so it can be tested without a network.
//
// Module responsibilities:
// - `config`: reads NOTION_DB_ID / NOTION_TOKEN, optionally from `.env`.
// - `api`: builds the page payload and POSTs it through a `Transport`.
// - `cli`: argument handling, user-facing messages and exit codes.
// - `logging`: append-only `error.log` for diagnostics.
pub mod api;
pub mod cli;
pub mod config;
pub mod logging;
