use super::{Encoding, Table, TableSource};

/// Parse decoded CSV text. The first record is the header row.
///
/// Ragged rows are accepted; blank lines are skipped by the reader.
pub fn parse(text: &str, encoding: Encoding) -> Result<Table, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(String::from).collect();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        rows.push(record.iter().map(String::from).collect());
    }

    Ok(Table::new(TableSource::Delimited(encoding), headers, rows))
}
