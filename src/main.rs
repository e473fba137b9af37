mod args;
mod entry;
mod error;
mod exporter;
mod fetch;
mod logger;
mod stats;
mod web;

use error::AppResult;

fn main() -> AppResult<()> {
    entry::run()
}
