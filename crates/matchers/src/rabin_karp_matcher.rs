use hash::{Hash, NeedleHash};

/// Rabin-Karp: hash the needle once, slide a same-sized window over the
/// haystack updating its hash in O(1) per shift, and verify byte-by-byte
/// whenever the hashes agree. Average O(n + m).
#[derive(Debug, Clone)]
pub struct RabinKarpMatcher<'n> {
    needle: &'n [u8],
    nhash: NeedleHash,
}

impl<'n> RabinKarpMatcher<'n> {
    pub fn new(needle: &'n [u8]) -> Self {
        RabinKarpMatcher { needle, nhash: NeedleHash::new(needle) }
    }

    /// Compare byte-by-byte against the window starting at `at`. A hash
    /// hit is only a candidate; modular hashes collide.
    fn cmp_needle_bytes(&self, haystack: &[u8], at: usize) -> bool {
        let window = &haystack[at..(at + self.needle.len())];
        self.needle.iter().zip(window).all(|(a, b)| a.eq(b))
    }

    /// Report every start offset where the needle occurs.
    pub fn find_all(&self, haystack: &[u8]) -> Vec<usize> {
        let needle = self.needle;
        if needle.is_empty() || needle.len() > haystack.len() {
            return Vec::new();
        }

        let mut found = Vec::new();
        let mut whash = Hash::new(&haystack[..needle.len()]);
        let last = haystack.len() - needle.len();
        for start in 0..=last {
            if self.nhash.value().eq(&whash) && self.cmp_needle_bytes(haystack, start) {
                found.push(start);
            }
            if start < last {
                whash.roll(haystack[start], haystack[start + needle.len()], self.nhash.lead());
            }
        }

        found
    }
}

mod hash {
    /// Base of the polynomial hash.
    const BASE: u64 = 101;
    /// Modulus for all hash arithmetic. A large prime keeps collisions
    /// rare, and every intermediate product of a reduced value with BASE
    /// stays well inside u64, so the hash never overflows no matter how
    /// long the haystack is.
    const MODULUS: u64 = 1_000_000_007;

    /// A rolling polynomial hash: `sum(s[k] * BASE^(len-1-k)) mod MODULUS`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Hash(u64);

    impl Hash {
        /// Hash a full window in one pass.
        pub fn new(bytes: &[u8]) -> Self {
            let mut hash = Hash(0);
            for &b in bytes {
                hash.add(b);
            }

            hash
        }

        /// Shift the window one byte: drop `old` from the front, append
        /// `new` at the back. `lead` is the coefficient of the front
        /// byte, `BASE^(len-1) mod MODULUS`.
        pub fn roll(&mut self, old: u8, new: u8, lead: u64) {
            self.del(old, lead);
            self.add(new);
        }

        /// Append a byte: multiply everything up one power of BASE and
        /// add the new low-order term.
        fn add(&mut self, byte: u8) {
            self.0 = (self.0 * BASE + u64::from(byte)) % MODULUS;
        }

        /// Remove the front byte by subtracting its full term. MODULUS is
        /// added first so the subtraction never wraps below zero.
        fn del(&mut self, byte: u8, lead: u64) {
            let term = u64::from(byte) * lead % MODULUS;
            self.0 = (self.0 + MODULUS - term) % MODULUS;
        }
    }

    /// The needle's hash together with the leading coefficient
    /// `BASE^(len-1) mod MODULUS` that every roll over a same-sized
    /// window needs. Both are plain values owned by one matcher; nothing
    /// survives the search that produced them.
    #[derive(Debug, Clone)]
    pub struct NeedleHash {
        hash: Hash,
        lead: u64,
    }

    impl NeedleHash {
        pub fn new(needle: &[u8]) -> Self {
            let mut nh = NeedleHash { hash: Hash(0), lead: 1 };
            if needle.is_empty() {
                return nh;
            }
            nh.hash.add(needle[0]);
            for &b in needle.iter().skip(1) {
                nh.hash.add(b);
                nh.lead = nh.lead * BASE % MODULUS;
            }

            nh
        }

        pub fn value(&self) -> &Hash {
            &self.hash
        }

        pub fn lead(&self) -> u64 {
            self.lead
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn roll_and_new_equal() {
            let hash1 = Hash::new(b"hello");
            let mut hash2 = Hash::new(b"xhell");

            // The window is 5 bytes, so 'x' carries BASE^4.
            let lead = BASE * BASE % MODULUS * BASE % MODULUS * BASE % MODULUS;
            hash2.roll(b'x', b'o', lead);

            assert_eq!(hash1, hash2);
        }

        #[test]
        fn rolling_across_text_matches_direct() {
            let text = b"the quick brown fox jumps over the lazy dog";
            let len = 7;
            let nh = NeedleHash::new(&text[..len]);

            let mut rolled = Hash::new(&text[..len]);
            for start in 1..=(text.len() - len) {
                rolled.roll(text[start - 1], text[start - 1 + len], nh.lead());
                assert_eq!(Hash::new(&text[start..(start + len)]), rolled);
            }
        }

        #[test]
        fn needle_hash_lead_is_base_pow() {
            assert_eq!(1, NeedleHash::new(b"a").lead());
            assert_eq!(BASE, NeedleHash::new(b"ab").lead());
            assert_eq!(BASE * BASE, NeedleHash::new(b"abc").lead());
        }

        #[test]
        fn hash_stays_reduced() {
            // 64 bytes of 0xff push an unreduced polynomial far past u64;
            // the modular hash must stay below MODULUS the whole way.
            let bytes = [0xff; 64];
            assert!(Hash::new(&bytes).0 < MODULUS);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::RabinKarpMatcher;

    #[test]
    fn find_all_some() {
        let matcher = RabinKarpMatcher::new(b"hello");

        assert_eq!(vec![6, 17], matcher.find_all(b"a b c hello next hello"));
    }

    #[test]
    fn find_all_none() {
        let matcher = RabinKarpMatcher::new(b"hello");

        assert!(matcher.find_all(b"olleh elloh").is_empty());
    }

    #[test]
    fn find_all_overlapping() {
        let matcher = RabinKarpMatcher::new(b"aa");

        assert_eq!(vec![0, 1, 2], matcher.find_all(b"aaaa"));
    }

    #[test]
    fn empty_needle_never_matches() {
        let matcher = RabinKarpMatcher::new(b"");

        assert!(matcher.find_all(b"anything").is_empty());
    }

    #[test]
    fn needle_longer_than_haystack() {
        let matcher = RabinKarpMatcher::new(b"abc");

        assert!(matcher.find_all(b"ab").is_empty());
    }

    #[test]
    fn match_at_both_ends() {
        let matcher = RabinKarpMatcher::new(b"ab");

        assert_eq!(vec![0, 4], matcher.find_all(b"abxxab"));
    }
}
