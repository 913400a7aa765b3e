/// Knuth-Morris-Pratt. The failure table is built once per matcher, and
/// the scan never re-reads haystack bytes, so the whole search is
/// O(n + m) regardless of how repetitive the inputs are.
#[derive(Debug, Clone)]
pub struct KmpMatcher<'n> {
    needle: &'n [u8],
    lps: Vec<usize>,
}

impl<'n> KmpMatcher<'n> {
    pub fn new(needle: &'n [u8]) -> Self {
        KmpMatcher { needle, lps: failure_table(needle) }
    }

    /// Report every start offset where the needle occurs.
    pub fn find_all(&self, haystack: &[u8]) -> Vec<usize> {
        let needle = self.needle;
        if needle.is_empty() {
            return Vec::new();
        }

        let mut found = Vec::new();
        let mut i = 0;
        let mut j = 0;
        while i < haystack.len() {
            if haystack[i] == needle[j] {
                i += 1;
                j += 1;
            }
            if j == needle.len() {
                found.push(i - j);
                // Resume from the longest needle prefix still in play so
                // overlapping occurrences are found too.
                j = self.lps[j - 1];
            } else if i < haystack.len() && haystack[i] != needle[j] {
                if j != 0 {
                    j = self.lps[j - 1];
                } else {
                    i += 1;
                }
            }
        }

        found
    }
}

/// The KMP prefix function: `lps[i]` is the length of the longest proper
/// prefix of `needle[..=i]` that is also a suffix of it.
fn failure_table(needle: &[u8]) -> Vec<usize> {
    let mut lps = vec![0; needle.len()];
    let mut len = 0;
    let mut i = 1;
    while i < needle.len() {
        if needle[i] == needle[len] {
            len += 1;
            lps[i] = len;
            i += 1;
        } else if len != 0 {
            len = lps[len - 1];
        } else {
            lps[i] = 0;
            i += 1;
        }
    }

    lps
}
