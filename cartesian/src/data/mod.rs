//! Text formats understood by the app: point files, typed-in coordinates and
//! file numbers.

use std::path::Path;

use app_core::string_error::ErrorStringExt;

/// A raw `[x, y]` pair as read from a file or typed in by the user.
pub type Point = [f64; 2];

/// Reads a point file: one `x,y` pair per line, blank lines are skipped.
///
/// A single malformed line rejects the whole file.
pub fn points_from_path(path: &Path) -> Result<Vec<Point>, String> {
    let raw = std::fs::read_to_string(path).err_to_string("could not read file")?;
    parse_points(&raw)
}

pub fn parse_points(raw: &str) -> Result<Vec<Point>, String> {
    raw.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .map(|(n, line)| parse_pair(line).map_err(|err| format!("line {n}: {err}")))
        .collect()
}

/// Parses user input of the form `(x,y)` or `x,y`.
pub fn parse_coordinate(text: &str) -> Result<Point, String> {
    let inner = text.trim().trim_matches(|c| c == '(' || c == ')');
    parse_pair(inner)
}

/// Parses a 1-based file number.
pub fn parse_index(text: &str) -> Result<usize, String> {
    let index = text
        .trim()
        .parse::<usize>()
        .err_to_string(&format!("{:?} is not a file number", text.trim()))?;
    if index == 0 {
        return Err("file numbers start at 1".into());
    }
    Ok(index)
}

fn parse_pair(text: &str) -> Result<Point, String> {
    let mut fields = text.split(',');
    match (fields.next(), fields.next(), fields.next()) {
        (Some(x), Some(y), None) => Ok([parse_float(x)?, parse_float(y)?]),
        _ => Err(format!(
            "expected two comma-separated numbers, found {text:?}"
        )),
    }
}

fn parse_float(field: &str) -> Result<f64, String> {
    let field = field.trim();
    let value = field
        .parse::<f64>()
        .err_to_string(&format!("invalid number {field:?}"))?;
    // NaN and infinities would poison the axis range.
    if !value.is_finite() {
        return Err(format!("number {field:?} is not finite"));
    }
    Ok(value)
}
