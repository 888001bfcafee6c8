//! Pagination parameters for the employee list.

pub const DEFAULT_SKIP: i64 = 0;
pub const DEFAULT_PAGE_SIZE: i64 = 50;

const SKIP_PARAM: &str = "skip";
const PAGE_SIZE_PARAM: &str = "pageSize";

/// Resolved `skip` / `pageSize` pair forwarded upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub skip: i64,
    pub page_size: i64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            skip: DEFAULT_SKIP,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Pagination {
    /// Resolve pagination from raw query pairs.
    ///
    /// The first occurrence of a parameter wins. Missing or non-integer
    /// values fall back to their default; the request is never rejected.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            skip: parse_or(first(pairs, SKIP_PARAM), DEFAULT_SKIP),
            page_size: parse_or(first(pairs, PAGE_SIZE_PARAM), DEFAULT_PAGE_SIZE),
        }
    }
}

fn first<'a>(pairs: &'a [(String, String)], name: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.as_str())
}

fn parse_or(raw: Option<&str>, default: i64) -> i64 {
    raw.and_then(|v| v.trim().parse().ok()).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_when_absent() {
        assert_eq!(Pagination::from_pairs(&[]), Pagination { skip: 0, page_size: 50 });
    }

    #[test]
    fn test_parses_integers() {
        assert_eq!(
            Pagination::from_pairs(&pairs(&[("skip", "20"), ("pageSize", "10")])),
            Pagination { skip: 20, page_size: 10 }
        );
    }

    #[test]
    fn test_malformed_values_fall_back_individually() {
        assert_eq!(
            Pagination::from_pairs(&pairs(&[("skip", "abc"), ("pageSize", "5")])),
            Pagination { skip: 0, page_size: 5 }
        );
        assert_eq!(
            Pagination::from_pairs(&pairs(&[("skip", "3"), ("pageSize", "1.5")])),
            Pagination { skip: 3, page_size: 50 }
        );
    }

    #[test]
    fn test_repeated_parameter_uses_first_occurrence() {
        assert_eq!(
            Pagination::from_pairs(&pairs(&[("skip", "1"), ("skip", "2"), ("pageSize", "7")])),
            Pagination { skip: 1, page_size: 7 }
        );
        // A malformed first value still falls back rather than trying the next one.
        assert_eq!(
            Pagination::from_pairs(&pairs(&[("pageSize", "x"), ("pageSize", "9")])),
            Pagination { skip: 0, page_size: 50 }
        );
    }

    #[test]
    fn test_unrelated_parameters_are_ignored() {
        assert_eq!(
            Pagination::from_pairs(&pairs(&[("page_size", "5"), ("Skip", "4")])),
            Pagination::default()
        );
    }
}
