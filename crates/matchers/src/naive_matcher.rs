/// Byte-by-byte scan with no preprocessing. O(n * m) worst case, but hard
/// to beat for short needles and small haystacks.
#[derive(Debug, Clone)]
pub struct NaiveMatcher<'n> {
    needle: &'n [u8],
}

impl<'n> NaiveMatcher<'n> {
    pub fn new(needle: &'n [u8]) -> Self {
        NaiveMatcher { needle }
    }

    /// Report every start offset where the needle occurs.
    pub fn find_all(&self, haystack: &[u8]) -> Vec<usize> {
        let needle = self.needle;
        if needle.is_empty() || needle.len() > haystack.len() {
            return Vec::new();
        }

        let mut found = Vec::new();
        for i in 0..(haystack.len() - needle.len() + 1) {
            let window = haystack[i..(i + needle.len())].iter();
            if needle.iter().zip(window).all(|(a, b)| a.eq(b)) {
                found.push(i);
            }
        }

        found
    }
}

#[cfg(test)]
mod tests {
    use crate::NaiveMatcher;

    #[test]
    fn find_all_some() {
        let haystack = b"a b c hello next hello";
        let matcher = NaiveMatcher::new(b"hello");

        assert_eq!(vec![6, 17], matcher.find_all(haystack));
    }

    #[test]
    fn find_all_none() {
        let matcher = NaiveMatcher::new(b"hello");

        assert!(matcher.find_all(b"olleh elloh").is_empty());
    }

    #[test]
    fn find_all_overlapping() {
        let matcher = NaiveMatcher::new(b"aa");

        assert_eq!(vec![0, 1, 2], matcher.find_all(b"aaaa"));
    }

    #[test]
    fn empty_needle_never_matches() {
        let matcher = NaiveMatcher::new(b"");

        assert!(matcher.find_all(b"anything").is_empty());
        assert!(matcher.find_all(b"").is_empty());
    }

    #[test]
    fn needle_longer_than_haystack() {
        let matcher = NaiveMatcher::new(b"abc");

        assert!(matcher.find_all(b"ab").is_empty());
    }

    #[test]
    fn partial_match_does_not_skip_next_start() {
        // "aab" fails at offset 0 two bytes in; the scan must still try
        // offset 1, not resume past it.
        let matcher = NaiveMatcher::new(b"aab");

        assert_eq!(vec![1], matcher.find_all(b"aaab"));
    }
}
