use memchr::{memchr, memchr_iter, memrchr};

/// Map a flat byte offset to a 1-based (row, col) position. The row grows
/// and the column resets on every newline strictly before `index`.
pub fn to_row_col(text: &[u8], index: usize) -> (usize, usize) {
    let before = &text[..index];
    let row = memchr_iter(b'\n', before).count() + 1;
    let col = match memrchr(b'\n', before) {
        Some(newline) => index - newline,
        None => index + 1,
    };
    (row, col)
}

/// Byte range of the line containing `index`, newline excluded. A match
/// spanning lines is attributed to the line it starts on.
pub fn line_bounds(text: &[u8], index: usize) -> (usize, usize) {
    let start = memrchr(b'\n', &text[..index]).map_or(0, |newline| newline + 1);
    let end = memchr(b'\n', &text[index..]).map_or(text.len(), |newline| index + newline);
    (start, end)
}
