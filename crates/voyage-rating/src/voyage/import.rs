use super::bulk::RatingRequest;
use super::domain::{HistoryEntry, Voyage};
use serde::{Deserialize, Deserializer};
use std::io::Read;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("failed to read voyage data: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid voyage CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {row}: profit '{value}' is not a number")]
    InvalidProfit { row: usize, value: String },
    #[error("row {row}: length '{value}' is not a non-negative integer")]
    InvalidLength { row: usize, value: String },
}

/// Reads captain histories (`zone,profit`) and voyage batches
/// (`name,zone,length`) from CSV.
pub struct VoyageImporter;

impl VoyageImporter {
    pub fn history_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<HistoryEntry>, ImportError> {
        let file = std::fs::File::open(path)?;
        Self::history_from_reader(file)
    }

    pub fn history_from_reader<R: Read>(reader: R) -> Result<Vec<HistoryEntry>, ImportError> {
        let mut entries = Vec::new();
        for (index, row) in csv_reader(reader).deserialize::<HistoryRow>().enumerate() {
            let row = row?;
            let profit = row
                .profit
                .map(|value| {
                    value.parse::<f64>().map_err(|_| ImportError::InvalidProfit {
                        row: data_row(index),
                        value,
                    })
                })
                .transpose()?;
            entries.push(HistoryEntry::new(row.zone.unwrap_or_default().as_str(), profit));
        }
        Ok(entries)
    }

    pub fn voyages_from_path<P: AsRef<Path>>(
        path: P,
        history: &[HistoryEntry],
    ) -> Result<Vec<RatingRequest>, ImportError> {
        let file = std::fs::File::open(path)?;
        Self::voyages_from_reader(file, history)
    }

    /// Every voyage in the batch is rated against the same captain history.
    pub fn voyages_from_reader<R: Read>(
        reader: R,
        history: &[HistoryEntry],
    ) -> Result<Vec<RatingRequest>, ImportError> {
        let mut requests = Vec::new();
        for (index, row) in csv_reader(reader).deserialize::<VoyageRow>().enumerate() {
            let row = row?;
            let length = row
                .length
                .map(|value| {
                    value.parse::<u32>().map_err(|_| ImportError::InvalidLength {
                        row: data_row(index),
                        value,
                    })
                })
                .transpose()?;
            requests.push(RatingRequest::new(
                row.name,
                Voyage::new(row.zone.as_str(), length),
                history.to_vec(),
            ));
        }
        Ok(requests)
    }
}

fn csv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader)
}

/// One-based line number of a data row, counting the header.
fn data_row(index: usize) -> usize {
    index + 2
}

#[derive(Debug, Deserialize)]
struct HistoryRow {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    zone: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    profit: Option<String>,
}

#[derive(Debug, Deserialize)]
struct VoyageRow {
    name: String,
    zone: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    length: Option<String>,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::voyage::domain::Zone;
    use std::io::Cursor;

    #[test]
    fn history_rows_allow_blank_fields() {
        let csv = "zone,profit\nchina,12.5\nlatam,\n,-3\n";
        let history = VoyageImporter::history_from_reader(Cursor::new(csv)).expect("import");

        assert_eq!(history.len(), 3);
        assert_eq!(history[0], HistoryEntry::new(Zone::China, Some(12.5)));
        assert_eq!(history[1].profit, None);
        assert_eq!(history[2].zone, Zone::default());
        assert!(history[2].is_loss());
    }

    #[test]
    fn history_rejects_non_numeric_profit() {
        let csv = "zone,profit\nchina,12\nlatam,lots\n";
        let error = VoyageImporter::history_from_reader(Cursor::new(csv)).expect_err("bad profit");

        match error {
            ImportError::InvalidProfit { row, value } => {
                assert_eq!(row, 3);
                assert_eq!(value, "lots");
            }
            other => panic!("expected invalid profit, got {other:?}"),
        }
    }

    #[test]
    fn voyages_share_the_supplied_history() {
        let history = vec![HistoryEntry::new("china", None)];
        let csv = "name,zone,length\nsilk, china ,19\ncoast,latam,\n";
        let requests =
            VoyageImporter::voyages_from_reader(Cursor::new(csv), &history).expect("import");

        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].name, "silk");
        assert_eq!(requests[0].voyage, Voyage::new("china", Some(19)));
        assert_eq!(requests[0].history, history);
        assert_eq!(requests[1].voyage.length, None);
    }

    #[test]
    fn voyages_reject_negative_length() {
        let csv = "name,zone,length\nsilk,china,-4\n";
        let error = VoyageImporter::voyages_from_reader(Cursor::new(csv), &[])
            .expect_err("negative length");
        assert!(matches!(error, ImportError::InvalidLength { row: 2, .. }));
    }

    #[test]
    fn history_from_path_propagates_io_errors() {
        let error = VoyageImporter::history_from_path("./does-not-exist.csv")
            .expect_err("expected io error");

        match error {
            ImportError::Io(_) => {}
            other => panic!("expected io error, got {other:?}"),
        }
    }
}
