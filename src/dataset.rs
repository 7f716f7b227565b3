use std::path::Path;

use crate::error::GenError;

// Writes one dataset file: one line per node, values space-separated in their
// default decimal formatting. Truncates any existing file at `path`. The file
// handle lives only for the duration of the call, so it is released on every
// exit path, success or error.
pub fn write_nodes(
    path: impl AsRef<Path>,
    nodes: impl Iterator<Item = Vec<f64>>,
) -> Result<(), GenError> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b' ')
        .from_path(path)?;

    for node in nodes {
        writer.write_record(node.iter().map(f64::to_string))?;
    }
    writer.flush()?;

    Ok(())
}

// Reads a dataset file back into nodes, one per line. Ragged lines surface as
// a csv error; a token that does not parse as a number names its line.
pub fn read_nodes(path: impl AsRef<Path>) -> Result<Vec<Vec<f64>>, GenError> {
    let path = path.as_ref();
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b' ')
        .has_headers(false)
        .from_path(path)?;

    let mut nodes = Vec::new();
    for (line, record) in reader.records().enumerate() {
        let record = record?;
        let mut node = Vec::with_capacity(record.len());
        for field in record.iter() {
            let value = field.parse().map_err(|_| GenError::BadValue {
                path: path.display().to_string(),
                line: line + 1,
                text: field.to_string(),
            })?;
            node.push(value);
        }
        nodes.push(node);
    }

    Ok(nodes)
}
