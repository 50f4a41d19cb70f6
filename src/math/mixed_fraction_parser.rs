use std::{str::FromStr, sync::LazyLock};

use regex::{Captures, Regex};
use strum_macros::{EnumIter, IntoStaticStr};

use super::mixed_fraction::{MAX_SAFE_INTEGER, MixedFraction};

/// An integer, a simple fraction or a mixed number, each with an optional minus sign.
static FRACTION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<sign>-)?(?:(?P<integer>[0-9]+)|(?P<numerator>[0-9]+)/(?P<denominator>[0-9]+)|(?P<whole>[0-9]+) +(?P<mixed_numerator>[0-9]+)/(?P<mixed_denominator>[0-9]+))$",
    )
    .unwrap()
});

/// What a user may have typed on the way to a fraction.
static INTERMEDIATE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*-?\s*$").unwrap());

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
pub enum ParseErrorKind {
    InvalidFormat,
    InvalidDenominator,
    NumberTooLarge,
}

impl ParseErrorKind {
    pub fn message(&self) -> &'static str {
        match self {
            ParseErrorKind::InvalidFormat => {
                "Please only use numerical digits, spaces or forward slashes (/)"
            }
            ParseErrorKind::InvalidDenominator => "Please do not put 0 in the denominator",
            ParseErrorKind::NumberTooLarge => {
                "None of the numbers should be larger than 9007199254740991"
            }
        }
    }
}

/// An error encountered while parsing a fraction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    kind: ParseErrorKind,
}

impl ParseError {
    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }

    pub fn message(&self) -> &'static str {
        self.kind.message()
    }
}

impl From<ParseErrorKind> for ParseError {
    fn from(kind: ParseErrorKind) -> Self {
        Self { kind }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for ParseError {}

/**
 * Returns whether the text is a transient state of an edit (nothing, or just a minus sign) rather than an attempt at a fraction.
 * Such text should not be parsed, and should not change any error shown to the user.
 */
pub fn is_intermediate_input(raw: &str) -> bool {
    INTERMEDIATE_REGEX.is_match(raw)
}

/**
 * Parse a fraction as typed by a person: "3", "-5/2" or "-3 1/2".
 * Leading and trailing whitespace is ignored.
 */
pub fn parse(raw: &str) -> Result<MixedFraction, ParseError> {
    let captures = FRACTION_REGEX
        .captures(raw.trim())
        .ok_or(ParseErrorKind::InvalidFormat)?;

    let is_negative = captures.name("sign").is_some();

    let (whole_number, numerator, denominator) = if captures.name("integer").is_some() {
        (parse_group(&captures, "integer")?, 0, 1)
    } else if captures.name("numerator").is_some() {
        (
            0,
            parse_group(&captures, "numerator")?,
            parse_group(&captures, "denominator")?,
        )
    } else {
        (
            parse_group(&captures, "whole")?,
            parse_group(&captures, "mixed_numerator")?,
            parse_group(&captures, "mixed_denominator")?,
        )
    };

    if denominator == 0 {
        return Err(ParseErrorKind::InvalidDenominator.into());
    }

    Ok(MixedFraction::new(
        is_negative,
        whole_number,
        numerator,
        denominator,
    ))
}

/**
 * The group consists of ASCII digits only, so the only way u64 parsing can fail is by being too large.
 */
fn parse_group(captures: &Captures, name: &str) -> Result<u64, ParseError> {
    let digits = captures
        .name(name)
        .ok_or(ParseErrorKind::InvalidFormat)?
        .as_str();
    match u64::from_str(digits) {
        Ok(value) if value <= MAX_SAFE_INTEGER => Ok(value),
        _ => Err(ParseErrorKind::NumberTooLarge.into()),
    }
}

impl FromStr for MixedFraction {
    type Err = ParseError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        parse(s)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use strum::IntoEnumIterator;

    use crate::math::{
        mixed_fraction::{MAX_SAFE_INTEGER, MixedFraction},
        mixed_fraction_parser::{ParseErrorKind, is_intermediate_input, parse},
    };

    #[test]
    fn parse_forms() {
        assert_eq!(parse("7").unwrap(), MixedFraction::new(false, 7, 0, 1));
        assert_eq!(parse("-7").unwrap(), MixedFraction::new(true, 7, 0, 1));
        assert_eq!(parse("5/2").unwrap(), MixedFraction::new(false, 0, 5, 2));
        assert_eq!(parse("-3 1/2").unwrap(), MixedFraction::new(true, 3, 1, 2));
        assert_eq!(parse("  2   3/4\t").unwrap(), MixedFraction::new(false, 2, 3, 4));
        assert_eq!(parse("007/010").unwrap(), MixedFraction::new(false, 0, 7, 10));
    }

    #[test]
    fn parse_display() {
        assert_eq!(parse("-3 1/2").unwrap().to_string(), "-3 1/2");
        assert_eq!(parse("5/2").unwrap().to_string(), "5/2");
        assert_eq!(parse("-0").unwrap().to_string(), "0");
    }

    #[test]
    fn parse_invalid_format() {
        for raw in [
            "abc", "", "+3", "1.5", "1,000", "1 / 2", "1/ 2", "1 /2", "- 3", "3 4", "1/2/3",
            "3 -1/2", "1/-2", "--1", "3\t1/2", "٣",
        ] {
            assert_eq!(
                parse(raw).unwrap_err().kind(),
                ParseErrorKind::InvalidFormat,
                "{:?}",
                raw
            );
        }
    }

    #[test]
    fn parse_invalid_denominator() {
        assert_eq!(parse("1/0").unwrap_err().kind(), ParseErrorKind::InvalidDenominator);
        assert_eq!(parse("-2 0/0").unwrap_err().kind(), ParseErrorKind::InvalidDenominator);
        assert_eq!(parse("0/000").unwrap_err().kind(), ParseErrorKind::InvalidDenominator);
    }

    #[test]
    fn parse_safe_integer_boundary() {
        let boundary = MAX_SAFE_INTEGER.to_string();
        let above = (MAX_SAFE_INTEGER + 1).to_string();

        assert_eq!(parse(&boundary).unwrap().whole_number(), MAX_SAFE_INTEGER);
        assert_eq!(parse(&above).unwrap_err().kind(), ParseErrorKind::NumberTooLarge);

        assert_eq!(
            parse(&format!("1/{}", boundary)).unwrap().denominator(),
            MAX_SAFE_INTEGER
        );
        assert_eq!(
            parse(&format!("1 {}/2", above)).unwrap_err().kind(),
            ParseErrorKind::NumberTooLarge
        );
        assert_eq!(
            parse("123456789012345678901234567890").unwrap_err().kind(),
            ParseErrorKind::NumberTooLarge
        );
    }

    #[test]
    fn parse_overflow_before_denominator() {
        let raw = format!("{}/0", MAX_SAFE_INTEGER + 1);
        assert_eq!(parse(&raw).unwrap_err().kind(), ParseErrorKind::NumberTooLarge);
    }

    #[test]
    fn parse_messages_distinct() {
        let messages = ParseErrorKind::iter()
            .map(|kind| kind.message())
            .collect::<std::collections::HashSet<_>>();
        assert_eq!(messages.len(), 3);
        assert_eq!(
            parse("abc").unwrap_err().to_string(),
            ParseErrorKind::InvalidFormat.message()
        );
    }

    #[test]
    fn parse_round_trip() {
        for is_negative in [false, true] {
            for whole_number in [0, 1, 12, MAX_SAFE_INTEGER] {
                for (numerator, denominator) in [(0, 1), (1, 2), (5, 2), (4, 8)] {
                    let fraction =
                        MixedFraction::new(is_negative, whole_number, numerator, denominator);
                    let parsed = parse(&fraction.to_string()).unwrap();
                    if is_negative && whole_number == 0 && numerator == 0 {
                        //-0 is written as 0
                        assert_eq!(parsed, MixedFraction::new(false, 0, 0, 1));
                    } else {
                        assert_eq!(parsed, fraction);
                    }
                }
            }
        }
    }

    #[test]
    fn intermediate_input() {
        for raw in ["", "-", "  ", " - ", "\t-\n"] {
            assert!(is_intermediate_input(raw), "{:?}", raw);
        }
        for raw in ["--", "-1", "0", "- -", "a", "/"] {
            assert!(!is_intermediate_input(raw), "{:?}", raw);
        }
    }

    #[test]
    fn parse_testfile() {
        let fin = fs::read_to_string("testfiles/fractions.txt").unwrap();
        for line in fin.lines().filter(|line| !line.starts_with('#') && !line.is_empty()) {
            let (raw, expected) = line.split_once('\t').unwrap();
            match parse(raw) {
                Ok(fraction) => assert_eq!(fraction.to_string(), expected, "{:?}", raw),
                Err(error) => {
                    let kind: &str = error.kind().into();
                    assert_eq!(kind, expected, "{:?}", raw)
                }
            }
        }
    }
}
