//! Step outputs (`GITHUB_OUTPUT`).

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::error::OutputError;

/// Append `name=value` lines to the outputs file.
///
/// Values must be single-line; a line break would start another output.
/// Nothing is written if any value is multi-line.
pub fn write_outputs(path: &Path, outputs: &[(&str, &str)]) -> Result<(), OutputError> {
    if let Some((name, _)) = outputs
        .iter()
        .find(|(_, value)| value.contains(['\n', '\r']))
    {
        return Err(OutputError::MultilineValue {
            name: name.to_string(),
        });
    }

    let map_err = |source: std::io::Error| OutputError::WriteFailed {
        path: path.display().to_string(),
        source,
    };

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(map_err)?;

    let mut content = String::new();
    for (name, value) in outputs {
        content.push_str(&format!("{}={}\n", name, value));
    }

    file.write_all(content.as_bytes()).map_err(map_err)
}
