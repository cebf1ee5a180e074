use std::fmt;

use serde::Serialize;

use super::error::CatalogError;

// ---------------------------------------------------------------------------
// Column layout
// ---------------------------------------------------------------------------

/// Header row of the sample sheet, in output order.
pub const HEADER: [&str; 4] = ["samplename", "description", "sampletype", "cell"];

/// Token positions (zero-indexed) of `filename.split('_')`.
const SAMPLETYPE_TOKEN: usize = 1;
const CELL_TOKEN: usize = 2;

// ---------------------------------------------------------------------------
// FileRecord – one row of the sample sheet
// ---------------------------------------------------------------------------

/// Fields derived from a single matching filename.
///
/// Field order matches [`HEADER`] so the record can be handed straight to a
/// `csv::Writer`. Column names come from [`HEADER`] alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRecord {
    /// Original filename, verbatim.
    pub filename: String,
    /// `sampletype` and `cell` joined by `_`.
    pub description: String,
    pub sampletype: String,
    pub cell: String,
}

impl FileRecord {
    /// Split `filename` on `_` and take tokens 1 and 2.
    ///
    /// Purely positional: `run_duplicates_marked_tumor_liver.bam` yields
    /// `sampletype = "duplicates"` and `cell = "marked"`. Tokens past the
    /// third are ignored; empty tokens are kept as-is.
    pub fn from_filename(filename: &str) -> Result<Self, CatalogError> {
        let tokens: Vec<&str> = filename.split('_').collect();

        let (Some(sampletype), Some(cell)) =
            (tokens.get(SAMPLETYPE_TOKEN), tokens.get(CELL_TOKEN))
        else {
            return Err(CatalogError::MalformedFilename {
                filename: filename.to_string(),
                tokens: tokens.len(),
            });
        };

        Ok(FileRecord {
            filename: filename.to_string(),
            description: format!("{sampletype}_{cell}"),
            sampletype: sampletype.to_string(),
            cell: cell.to_string(),
        })
    }

    /// The four output fields in [`HEADER`] order.
    pub fn row(&self) -> [&str; 4] {
        [
            self.filename.as_str(),
            self.description.as_str(),
            self.sampletype.as_str(),
            self.cell.as_str(),
        ]
    }
}

impl fmt::Display for FileRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.row().join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn takes_second_and_third_tokens() {
        let rec = FileRecord::from_filename("lib_tumor_liver_duplicates_marked.bam").unwrap();
        assert_eq!(rec.filename, "lib_tumor_liver_duplicates_marked.bam");
        assert_eq!(rec.sampletype, "tumor");
        assert_eq!(rec.cell, "liver");
        assert_eq!(rec.description, "tumor_liver");
    }

    #[test]
    fn positional_split_is_not_marker_aware() {
        let rec = FileRecord::from_filename("run_duplicates_marked_tumor_liver.bam").unwrap();
        assert_eq!(rec.sampletype, "duplicates");
        assert_eq!(rec.cell, "marked");
        assert_eq!(
            rec.to_string(),
            "run_duplicates_marked_tumor_liver.bam,duplicates_marked,duplicates,marked"
        );
    }

    #[test]
    fn third_token_may_carry_extension() {
        let rec = FileRecord::from_filename("x_normal_blood.duplicates_marked.bam").unwrap();
        assert_eq!(rec.cell, "blood.duplicates");
        assert_eq!(rec.description, "normal_blood.duplicates");
    }

    #[test]
    fn empty_tokens_are_kept() {
        let rec = FileRecord::from_filename("a__b_duplicates_marked.bam").unwrap();
        assert_eq!(rec.sampletype, "");
        assert_eq!(rec.cell, "b");
        assert_eq!(rec.description, "_b");
    }

    #[test]
    fn no_underscore_is_malformed() {
        match FileRecord::from_filename("sample.bam") {
            Err(CatalogError::MalformedFilename { filename, tokens }) => {
                assert_eq!(filename, "sample.bam");
                assert_eq!(tokens, 1);
            }
            other => panic!("expected MalformedFilename, got {other:?}"),
        }
    }

    #[test]
    fn two_tokens_is_malformed() {
        let err = FileRecord::from_filename("duplicates_marked.bam").unwrap_err();
        assert!(matches!(err, CatalogError::MalformedFilename { tokens: 2, .. }));
        assert!(err.to_string().contains("duplicates_marked.bam"));
    }

    #[test]
    fn row_follows_header_order() {
        let rec = FileRecord::from_filename("p_s_c.bam").unwrap();
        assert_eq!(rec.row(), ["p_s_c.bam", "s_c.bam", "s", "c.bam"]);
        assert_eq!(HEADER.len(), rec.row().len());
    }
}
