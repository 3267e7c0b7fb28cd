//! Locate dice rolls in free text.

use crate::error::Result;
use crate::parser::Parser;
use std::ops::Range;

/// Every roll found in `texts`, in order of appearance
///
/// Whitespace is removed from each text before matching so `2 d 6` reads as `2d6`.
/// Rolls separated only by whitespace therefore merge: `1d6 2d8` yields `1d62`.
pub fn parse<I, T>(texts: I) -> Result<Vec<String>>
where
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    let mut output = Vec::new();
    for text in texts {
        let stripped = Parser::strip(text.as_ref());
        output.extend(Parser::rolls(&stripped)?.map(|roll| roll.as_str().to_owned()));
    }
    tracing::trace!(found = output.len(), "parsed rolls");
    Ok(output)
}

/// Byte ranges of the contiguous rolls in `text`, whitespace left as is
pub fn locate(text: &str) -> Result<Vec<Range<usize>>> {
    Ok(Parser::rolls(text)?
        .map(|roll| {
            let span = roll.as_span();
            span.start()..span.end()
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::locate;
    use super::parse;
    use proptest::prelude::*;

    fn check(input: &str, expected: &[&str]) {
        assert_eq!(expected, parse([input]).unwrap(), "parsing {input:?}");
    }

    #[test]
    fn parse_plain() {
        check("2d6", &["2d6"]);
        check("roll a 2d6 please", &["2d6"]);
        check("roll a 2d6 and 2 d 8 please", &["2d6", "2d8"]);
        check("2D6 and 2 D 8", &["2D6", "2D8"]);
        check("nothing to see", &[]);
        check("", &[]);
    }

    #[test]
    fn parse_whitespace() {
        check("2 d 6", &["2d6"]);
        check("2\td\t6", &["2d6"]);
        check("2\nd\n6", &["2d6"]);
        check("2\nd\n 6\n+\n2 ", &["2d6+2"]);
        check("2\td\t6\t+\t2", &["2d6+2"]);
        check("roll 2 d 6 + 2", &["2d6+2"]);
        check("then roll 2 d 8 - 3", &["2d8-3"]);
    }

    #[test]
    fn parse_no_validation() {
        check("0d6", &["0d6"]);
        check("2d0", &["2d0"]);
        check("try rolling 99999d99999?", &["99999d99999"]);
    }

    #[test]
    fn parse_digit_limits() {
        check("123456d6", &["23456d6"]);
        check("2d123456", &["2d12345"]);
        check("2d6+123456", &["2d6+12345"]);
        check("2d6+", &["2d6"]);
    }

    #[test]
    fn parse_merges_across_whitespace() {
        check("1d6 2d8", &["1d62"]);
    }

    #[test]
    fn parse_many() {
        check(
            "So 1d6 +2 of something and 2d8-3 harmless something else and \
             3D12+0 whatever of 8d10+20 nope.",
            &["1d6+2", "2d8-3", "3D12+0", "8d10+20"],
        );
        assert_eq!(
            vec!["1d4", "2d6", "3d8"],
            parse(vec!["1d4 then 2d6".to_owned(), "3d8".to_owned()]).unwrap()
        );
    }

    #[test]
    fn locate_spans() {
        let text = "roll 2d6+1, then 1 d 4 and 3D8";
        let spans = locate(text).unwrap();
        let found: Vec<&str> = spans.into_iter().map(|r| &text[r]).collect();
        assert_eq!(vec!["2d6+1", "3D8"], found);
    }

    fn token() -> impl Strategy<Value = String> {
        ("[0-9]{1,5}", "[dD]", "[0-9]{1,5}", "([+-][0-9]{1,5})?")
            .prop_map(|(count, d, faces, modifier)| format!("{count}{d}{faces}{modifier}"))
    }

    proptest! {
        #[test]
        fn token_matches_itself(t in token()) {
            prop_assert_eq!(vec![t.clone()], parse([&t]).unwrap());
        }

        #[test]
        fn reparse_is_stable(ts in prop::collection::vec(token(), 0..6)) {
            let first = parse([ts.join(" and ")]).unwrap();
            let again = parse([first.join(", ")]).unwrap();
            prop_assert_eq!(first, again);
        }

        #[test]
        fn whitespace_is_ignored(t in token(), gap in "[ \t\n]{0,3}") {
            let spread: String = t
                .chars()
                .flat_map(|c| std::iter::once(c).chain(gap.chars()))
                .collect();
            prop_assert_eq!(vec![t.clone()], parse([spread]).unwrap());
        }
    }
}
