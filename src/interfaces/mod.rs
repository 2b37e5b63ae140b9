use crate::phonelib::territory::PatternPair;

/// Internal pattern matching API used to isolate the underlying
/// implementation of the matcher and allow different implementations to be
/// swapped in easily.
pub(crate) trait MatcherApi: Send + Sync {
    /// Returns whether the given national number (a string containing only
    /// decimal digits) fully matches the possible pattern of the given pair.
    fn match_possible_number(&self, number: &str, pair: &PatternPair) -> bool;

    /// Returns whether the given national number fully matches the valid
    /// pattern of the given pair.
    fn match_valid_number(&self, number: &str, pair: &PatternPair) -> bool;
}
