mod catalog;

use std::io;

use anyhow::{Context, Result};
use log::info;

use catalog::scanner::{scan_current_dir, SEARCH_PATTERN};
use catalog::writer::write_catalog;

fn main() -> Result<()> {
    env_logger::init();

    let filenames = scan_current_dir()?;
    info!("{} file(s) match {SEARCH_PATTERN}", filenames.len());

    let stdout = io::stdout();
    let rows = write_catalog(stdout.lock(), &filenames).context("building sample sheet")?;
    info!("wrote {rows} row(s)");

    Ok(())
}
