use std::io::{self, Write};

use bstr::ByteSlice;
use termcolor::{Color, ColorSpec, WriteColor};

use crate::position;

/// Print one line per match: a `row:col:` prefix followed by the line the
/// match starts on, with the matched bytes highlighted. Lines are decoded
/// lossily; matchers work on bytes and the haystack need not be UTF-8.
pub fn print_matches<W: WriteColor>(
    wtr: &mut W,
    haystack: &[u8],
    needle_len: usize,
    found: &[usize],
) -> io::Result<()> {
    let mut prefix_spec = ColorSpec::new();
    prefix_spec.set_fg(Some(Color::Green));
    let mut match_spec = ColorSpec::new();
    match_spec.set_fg(Some(Color::Red)).set_bold(true);

    for &index in found {
        let (row, col) = position::to_row_col(haystack, index);
        let (start, end) = position::line_bounds(haystack, index);
        // A match may run past its first line; highlight what fits.
        let match_end = (index + needle_len).min(end);

        wtr.set_color(&prefix_spec)?;
        write!(wtr, "{}:{}:", row, col)?;
        wtr.reset()?;
        write!(wtr, "{}", haystack[start..index].as_bstr())?;
        wtr.set_color(&match_spec)?;
        write!(wtr, "{}", haystack[index..match_end].as_bstr())?;
        wtr.reset()?;
        writeln!(wtr, "{}", haystack[match_end..end].as_bstr())?;
    }

    Ok(())
}

/// Print all matches as one JSON document in the shape
/// `{"matches": [{"index": .., "row": .., "col": ..}, ..]}`.
pub fn print_json<W: Write>(mut wtr: W, haystack: &[u8], found: &[usize]) -> io::Result<()> {
    let matches: Vec<serde_json::Value> = found
        .iter()
        .map(|&index| {
            let (row, col) = position::to_row_col(haystack, index);
            serde_json::json!({ "index": index, "row": row, "col": col })
        })
        .collect();
    writeln!(wtr, "{}", serde_json::json!({ "matches": matches }))
}
