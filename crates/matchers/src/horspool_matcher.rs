/// Horspool, the simplified Boyer-Moore: compare right to left and, on a
/// mismatch, shift by how far the text byte under the window's right edge
/// is from the needle's end. Sub-linear on average for large alphabets,
/// O(n * m) worst case.
#[derive(Debug, Clone)]
pub struct HorspoolMatcher<'n> {
    needle: &'n [u8],
    shift: BadCharTable,
}

impl<'n> HorspoolMatcher<'n> {
    pub fn new(needle: &'n [u8]) -> Self {
        HorspoolMatcher { needle, shift: BadCharTable::new(needle) }
    }

    /// Report every start offset where the needle occurs.
    pub fn find_all(&self, haystack: &[u8]) -> Vec<usize> {
        let needle = self.needle;
        if needle.is_empty() || needle.len() > haystack.len() {
            return Vec::new();
        }

        let mut found = Vec::new();
        // `i` is the haystack index under the window's right edge.
        let mut i = needle.len() - 1;
        while i < haystack.len() {
            let matched = (0..needle.len())
                .all(|j| needle[needle.len() - 1 - j] == haystack[i - j]);
            if matched {
                found.push(i - (needle.len() - 1));
                // Advance by one so overlapping occurrences are found.
                i += 1;
            } else {
                i += self.shift.get(haystack[i]);
            }
        }

        found
    }
}

/// Bad-character shift table: for each byte, how far the window may jump
/// when that byte sits under the window's right edge on a mismatch. Bytes
/// absent from the needle (and a final byte occurring nowhere else) take
/// the default shift of the full needle length.
#[derive(Debug, Clone)]
struct BadCharTable {
    shifts: [usize; 256],
}

impl BadCharTable {
    fn new(needle: &[u8]) -> Self {
        let mut shifts = [needle.len(); 256];
        // The last needle byte keeps its default (or an earlier
        // occurrence's shift), hence the right-open bound.
        for i in 0..needle.len().saturating_sub(1) {
            shifts[usize::from(needle[i])] = needle.len() - 1 - i;
        }

        BadCharTable { shifts }
    }

    fn get(&self, byte: u8) -> usize {
        self.shifts[usize::from(byte)]
    }
}
