use std::io::Write;

use csv::{QuoteStyle, Terminator, WriterBuilder};
use log::debug;

use super::error::CatalogError;
use super::model::{FileRecord, HEADER};

/// Write the sample sheet for `filenames` to `out`.
///
/// The header is always written, then one row per filename in the given
/// order. Fields are never quoted or escaped. If a filename is malformed,
/// everything written before it is flushed and the error is returned.
///
/// Returns the number of data rows written.
pub fn write_catalog<W: Write>(out: W, filenames: &[String]) -> Result<usize, CatalogError> {
    let mut wtr = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(out);

    wtr.write_record(HEADER)?;

    let mut rows = 0;
    for filename in filenames {
        let record = match FileRecord::from_filename(filename) {
            Ok(record) => record,
            Err(err) => {
                wtr.flush()?;
                return Err(err);
            }
        };
        debug!("row {record}");
        wtr.serialize(&record)?;
        rows += 1;
    }

    wtr.flush()?;
    Ok(rows)
}
