//! Resolver for "number with optional total" values such as track and disc
//! numbers.
//!
//! Three spellings are accepted, tried in order: `N/M`, `N of M` and a bare
//! `N`. Resolution never fails; any side that is not an integer becomes zero.

const SLASH: &str = "/";
const OF: &str = " of ";

/// A number together with its (possibly absent) total. Zero means absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PairValue {
    pub number: u32,
    pub total: u32,
}

impl PairValue {
    /// Parses `value`; see [`parse_pair`].
    pub fn parse(value: &str) -> Self {
        let (number, total) = parse_pair(value);
        Self { number, total }
    }

    /// Renders the pair in the normalised `N/M` (or `N`) spelling.
    pub fn format(&self) -> String {
        format_pair(self.number, self.total)
    }
}

/// Parses `N/M`, `N of M` or `N` into `(number, total)`.
///
/// A separator only applies when it occurs exactly once, so `1/2/3` falls
/// through to the bare-number rule and resolves to `(0, 0)`.
pub fn parse_pair(value: &str) -> (u32, u32) {
    if let Some(pair) = split_single(value, SLASH) {
        return pair;
    }

    if let Some(pair) = split_single(value, OF) {
        return pair;
    }

    (parse_lenient(value), 0)
}

/// Formats a pair as `N/M` when a total is present, otherwise as `N`.
pub fn format_pair(number: u32, total: u32) -> String {
    if total > 0 {
        format!("{number}/{total}")
    } else {
        number.to_string()
    }
}

/// Parses a trimmed integer, mapping anything unparsable to zero.
pub(crate) fn parse_lenient(value: &str) -> u32 {
    value.trim().parse().unwrap_or(0)
}

fn split_single(value: &str, separator: &str) -> Option<(u32, u32)> {
    if value.matches(separator).count() != 1 {
        return None;
    }

    let (number, total) = value.split_once(separator)?;
    Some((parse_lenient(number), parse_lenient(total)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_slash_syntax() {
        assert_eq!(parse_pair("3/12"), (3, 12));
        assert_eq!(parse_pair(" 3 / 12 "), (3, 12));
    }

    #[test]
    fn parses_of_syntax() {
        assert_eq!(parse_pair("3 of 6"), (3, 6));
    }

    #[test]
    fn bare_number_has_no_total() {
        assert_eq!(parse_pair("7"), (7, 0));
        assert_eq!(parse_pair("  7 "), (7, 0));
    }

    #[test]
    fn garbage_degrades_to_zero() {
        assert_eq!(parse_pair("A/B"), (0, 0));
        assert_eq!(parse_pair("4/x"), (4, 0));
        assert_eq!(parse_pair(""), (0, 0));
        assert_eq!(parse_pair("-1"), (0, 0));
    }

    #[test]
    fn repeated_separator_is_not_a_pair() {
        assert_eq!(parse_pair("1/2/3"), (0, 0));
    }

    #[test]
    fn slash_wins_over_of() {
        assert_eq!(parse_pair("2/5 of 9"), (2, 0));
    }

    #[test]
    fn formats_with_and_without_total() {
        assert_eq!(format_pair(3, 6), "3/6");
        assert_eq!(format_pair(3, 0), "3");
        assert_eq!(PairValue::parse("3 of 6").format(), "3/6");
    }
}
