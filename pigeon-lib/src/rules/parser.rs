//! Rule spec parsing

use super::ParsedRule;
use super::RuleName;

/// Parses a rule spec into its clauses, preserving their order.
///
/// Blank clauses, such as the tail of `"required;"`, are skipped on purpose
/// instead of being read as a second `required`. A clause naming an unknown
/// rule is read as `required`, which is how rule specs have always behaved.
pub fn parse(spec: &str) -> Vec<ParsedRule> {
    spec.split(';')
        .filter_map(|clause| {
            let mut parts = clause.split(':');
            let raw_name = parts.next()?.trim();
            if raw_name.is_empty() {
                return None;
            }

            let name = RuleName::from_name(raw_name).unwrap_or_else(|| {
                log::warn!("Unknown rule {:?}, treating it as required", raw_name);
                RuleName::Required
            });
            let argument = parts.next().map(|arg| arg.trim().to_string());

            Some(ParsedRule { name, argument })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_in_order() {
        assert_eq!(
            parse("required;min-len:3;max-len: 40 ;email"),
            vec![
                ParsedRule::new(RuleName::Required),
                ParsedRule::with_argument(RuleName::MinLen, "3"),
                ParsedRule::with_argument(RuleName::MaxLen, "40"),
                ParsedRule::new(RuleName::Email),
            ]
        );
    }

    #[test]
    fn test_names_ignore_case() {
        assert_eq!(parse(" Digits-Space "), vec![ParsedRule::new(RuleName::DigitsSpace)]);
    }

    #[test]
    fn test_empty_spec() {
        assert!(parse("").is_empty());
        assert!(parse("  ").is_empty());
        assert!(parse(";;").is_empty());
    }

    #[test]
    fn test_trailing_separator() {
        assert_eq!(parse("required;"), vec![ParsedRule::new(RuleName::Required)]);
    }

    #[test]
    fn test_unknown_rule_is_required() {
        assert_eq!(
            parse("zipcode;digits"),
            vec![ParsedRule::new(RuleName::Required), ParsedRule::new(RuleName::Digits)]
        );
    }

    #[test]
    fn test_extra_argument_segments_ignored() {
        assert_eq!(
            parse("max-len:5:9"),
            vec![ParsedRule::with_argument(RuleName::MaxLen, "5")]
        );
    }

    #[test]
    fn test_empty_argument() {
        assert_eq!(
            parse("min-len:"),
            vec![ParsedRule::with_argument(RuleName::MinLen, "")]
        );
    }
}
