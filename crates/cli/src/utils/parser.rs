use anyhow::{Result, bail};
use yap_tools_core::Position;

/// Split `path:line[:col]` into the path and a 0-based position.
///
/// Line and column are 1-based on the command line; a missing column means
/// the first one.
pub fn parse_filepath_with_position(filepath_arg: &str) -> Result<(String, Position)> {
    let mut parts = filepath_arg.rsplitn(3, ':');
    let last = parts.next().unwrap_or_default();
    let middle = parts.next();
    let rest = parts.next();

    let (path, line, column) = match (rest, middle) {
        (Some(path), Some(line)) if line.parse::<u32>().is_ok() => {
            (path.to_string(), line, Some(last))
        }
        (Some(path), Some(middle)) => (format!("{path}:{middle}"), last, None),
        (None, Some(path)) => (path.to_string(), last, None),
        _ => bail!("Expected <file>:<line>[:<column>], got '{}'", filepath_arg),
    };

    let line = parse_one_based(line, "line", filepath_arg)?;
    let column = match column {
        Some(col) => parse_one_based(col, "column", filepath_arg)?,
        None => 0,
    };

    Ok((path, Position::new(line, column)))
}

fn parse_one_based(value: &str, what: &str, arg: &str) -> Result<u32> {
    match value.parse::<u32>() {
        Ok(n) if n > 0 => Ok(n - 1),
        _ => bail!("Invalid {} '{}' in '{}'", what, value, arg),
    }
}
