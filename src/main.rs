use anyhow::Result;

mod cli;
mod config;
mod errors;
mod hooks;
mod notify;
mod results;

use cli::CliApp;

fn main() -> Result<()> {
    CliApp::run()
}
