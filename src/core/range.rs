//! Selector expansion for bulk delete
//!
//! A selector is a comma-separated list of tokens. A token containing `_` is
//! an inclusive `start_end` range, expanded ascending when start < end and
//! descending otherwise; any other token passes through verbatim and is only
//! validated later, at store lookup.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RangeError {
    #[error("malformed range '{0}': both bounds must be integers")]
    Malformed(String),
}

/// Expand a selector into an ordered list of id tokens.
///
/// Duplicates are preserved, order follows the input. `"5_5"` yields `["5"]`.
pub fn expand(selector: &str) -> Result<Vec<String>, RangeError> {
    let mut ids = Vec::new();
    for token in selector.split(',') {
        match token.split_once('_') {
            Some((start, end)) => {
                let start: i64 = start
                    .trim()
                    .parse()
                    .map_err(|_| RangeError::Malformed(token.to_string()))?;
                let end: i64 = end
                    .trim()
                    .parse()
                    .map_err(|_| RangeError::Malformed(token.to_string()))?;
                if start < end {
                    ids.extend((start..=end).map(|i| i.to_string()));
                } else {
                    ids.extend((end..=start).rev().map(|i| i.to_string()));
                }
            }
            None => ids.push(token.to_string()),
        }
    }
    Ok(ids)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok(selector: &str) -> Vec<String> {
        expand(selector).unwrap()
    }

    #[test]
    fn discrete_ids_pass_through() {
        assert_eq!(ok("3,5"), ["3", "5"]);
    }

    #[test]
    fn ascending_range_is_inclusive() {
        assert_eq!(ok("1_3"), ["1", "2", "3"]);
    }

    #[test]
    fn descending_range_is_inclusive() {
        assert_eq!(ok("3_1"), ["3", "2", "1"]);
    }

    #[test]
    fn degenerate_range_yields_single_id() {
        assert_eq!(ok("5_5"), ["5"]);
    }

    #[test]
    fn mixed_tokens_expand_in_input_order() {
        assert_eq!(ok("2,4_6,9"), ["2", "4", "5", "6", "9"]);
    }

    #[test]
    fn duplicates_are_preserved() {
        assert_eq!(ok("2,2,1_2"), ["2", "2", "1", "2"]);
    }

    #[test]
    fn non_integer_plain_token_is_kept_verbatim() {
        // Validation happens at lookup, not here
        assert_eq!(ok("abc"), ["abc"]);
    }

    #[test]
    fn non_integer_range_bound_is_malformed() {
        assert_eq!(
            expand("1_x"),
            Err(RangeError::Malformed("1_x".to_string()))
        );
        assert_eq!(
            expand("a_b"),
            Err(RangeError::Malformed("a_b".to_string()))
        );
        // More than one underscore cannot parse as two integers
        assert_eq!(
            expand("1_2_3"),
            Err(RangeError::Malformed("1_2_3".to_string()))
        );
    }
}
