/*!
This crate provides exact substring search over a byte haystack with four
classical algorithms: naive scan, Knuth-Morris-Pratt, Rabin-Karp and
Horspool. Every matcher reports *all* occurrence start offsets, overlapping
occurrences included, in ascending order.

Each matcher is a plain struct: the constructor takes the needle and builds
whatever private table the algorithm needs (KMP failure table, Horspool
bad-character table, Rabin-Karp needle hash), and `find_all` scans a
haystack. Nothing is cached across calls, so matchers are safe to use from
any number of threads at once.
 */

use std::fmt;
use std::str::FromStr;

pub use horspool_matcher::HorspoolMatcher;
pub use kmp_matcher::KmpMatcher;
pub use naive_matcher::NaiveMatcher;
pub use rabin_karp_matcher::RabinKarpMatcher;

mod horspool_matcher;
mod kmp_matcher;
mod naive_matcher;
mod rabin_karp_matcher;

/// The search strategies this crate implements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Naive,
    Kmp,
    RabinKarp,
    Horspool,
}

impl Algorithm {
    /// Resolve an identifier leniently: anything that is not a known
    /// algorithm name routes to `Naive`. Callers that want to reject bad
    /// identifiers instead should use the `FromStr` impl before calling
    /// [`search`].
    pub fn from_ident(ident: &str) -> Algorithm {
        match ident {
            "kmp" => Algorithm::Kmp,
            "rabin-karp" => Algorithm::RabinKarp,
            "horspool" => Algorithm::Horspool,
            _ => Algorithm::Naive,
        }
    }

    /// The canonical identifier, as accepted by [`Algorithm::from_ident`].
    pub fn ident(&self) -> &'static str {
        match *self {
            Algorithm::Naive => "naive",
            Algorithm::Kmp => "kmp",
            Algorithm::RabinKarp => "rabin-karp",
            Algorithm::Horspool => "horspool",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.ident())
    }
}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithmError;

    fn from_str(s: &str) -> Result<Algorithm, UnknownAlgorithmError> {
        match s {
            "naive" => Ok(Algorithm::Naive),
            "kmp" => Ok(Algorithm::Kmp),
            "rabin-karp" => Ok(Algorithm::RabinKarp),
            "horspool" => Ok(Algorithm::Horspool),
            _ => Err(UnknownAlgorithmError { ident: s.to_string() }),
        }
    }
}

/// Returned by the strict `FromStr` impl when an identifier does not name
/// one of the four algorithms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAlgorithmError {
    ident: String,
}

impl UnknownAlgorithmError {
    /// The identifier that failed to resolve.
    pub fn ident(&self) -> &str {
        &self.ident
    }
}

impl fmt::Display for UnknownAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown search algorithm: {:?}", self.ident)
    }
}

impl std::error::Error for UnknownAlgorithmError {}

/// Find every occurrence of `needle` in `haystack` with the given
/// algorithm.
///
/// The result is strictly increasing and complete: overlapping occurrences
/// are all reported. An empty needle never matches, and a needle longer
/// than the haystack cannot match, so both yield an empty result. All four
/// algorithms return identical offsets for identical inputs; they differ
/// only in how they get there.
pub fn search(haystack: &[u8], needle: &[u8], algorithm: Algorithm) -> Vec<usize> {
    log::trace!(
        "dispatching {} search, haystack len {}, needle len {}",
        algorithm,
        haystack.len(),
        needle.len(),
    );
    match algorithm {
        Algorithm::Naive => NaiveMatcher::new(needle).find_all(haystack),
        Algorithm::Kmp => KmpMatcher::new(needle).find_all(haystack),
        Algorithm::RabinKarp => RabinKarpMatcher::new(needle).find_all(haystack),
        Algorithm::Horspool => HorspoolMatcher::new(needle).find_all(haystack),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_ident_known() {
        assert_eq!(Algorithm::Kmp, Algorithm::from_ident("kmp"));
        assert_eq!(Algorithm::RabinKarp, Algorithm::from_ident("rabin-karp"));
        assert_eq!(Algorithm::Horspool, Algorithm::from_ident("horspool"));
        assert_eq!(Algorithm::Naive, Algorithm::from_ident("naive"));
    }

    #[test]
    fn from_ident_unknown_defaults_to_naive() {
        assert_eq!(Algorithm::Naive, Algorithm::from_ident("boyer-moore"));
        assert_eq!(Algorithm::Naive, Algorithm::from_ident(""));
    }

    #[test]
    fn from_str_is_strict() {
        assert_eq!(Ok(Algorithm::Horspool), "horspool".parse());
        let err = "hashing".parse::<Algorithm>().unwrap_err();
        assert_eq!("hashing", err.ident());
    }

    #[test]
    fn ident_round_trips() {
        for algorithm in [
            Algorithm::Naive,
            Algorithm::Kmp,
            Algorithm::RabinKarp,
            Algorithm::Horspool,
        ] {
            assert_eq!(algorithm, Algorithm::from_ident(algorithm.ident()));
        }
    }
}
