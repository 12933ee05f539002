//! Closed numeric intervals with an open-ended parsing grammar.
//!
//! Constraint flags accept `v`, `:v`, `v:` and `a:b` forms. How a bare value
//! is widened into an interval depends on the flag's direction mode: an exact
//! flag keeps `[v, v]`, an at-most flag reads `[MIN, v]`, an at-least flag
//! reads `[v, MAX]`.

use std::fmt::{Debug, Display};
use std::str::FromStr;

use thiserror::Error;

/// Numeric kinds an interval can range over.
pub trait Scalar: Copy + PartialOrd + Debug + Display + FromStr {
    const MIN: Self;
    const MAX: Self;

    /// Strict token parse: trailing garbage, empty tokens and overflow all fail.
    fn parse_token(text: &str) -> Option<Self>;
}

impl Scalar for i32 {
    const MIN: Self = i32::MIN;
    const MAX: Self = i32::MAX;

    fn parse_token(text: &str) -> Option<Self> {
        text.parse().ok()
    }
}

impl Scalar for f32 {
    const MIN: Self = f32::MIN;
    const MAX: Self = f32::MAX;

    fn parse_token(text: &str) -> Option<Self> {
        // Overflowing literals parse to infinity; treat them as malformed
        // alongside explicit "inf"/"nan" tokens.
        text.parse().ok().filter(|value: &f32| value.is_finite())
    }
}

/// How a bare value (no `:` separator) is widened into an interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntervalMode {
    /// `v` means exactly `[v, v]`.
    Exact,
    /// `v` means `[MIN, v]`.
    AtMost,
    /// `v` means `[v, MAX]`.
    AtLeast,
}

/// Malformed interval specification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed interval '{text}'")]
pub struct IntervalParseError {
    pub text: String,
}

/// A closed range `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval<T: Scalar> {
    pub min: T,
    pub max: T,
}

impl<T: Scalar> Interval<T> {
    pub fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    /// The all-accepting interval, used as the default absent user input.
    pub fn full() -> Self {
        Self {
            min: T::MIN,
            max: T::MAX,
        }
    }

    /// Parse an interval specification.
    ///
    /// Grammar: `v` (widened per `mode`), `:v` (open lower bound), `v:` (open
    /// upper bound), `a:b` (literal range, rejected when `b < a`).
    pub fn parse(text: &str, mode: IntervalMode) -> Result<Self, IntervalParseError> {
        let fail = || IntervalParseError {
            text: text.to_string(),
        };

        match text.split_once(':') {
            None => {
                let value = T::parse_token(text).ok_or_else(fail)?;
                Ok(match mode {
                    IntervalMode::Exact => Self::new(value, value),
                    IntervalMode::AtMost => Self::new(T::MIN, value),
                    IntervalMode::AtLeast => Self::new(value, T::MAX),
                })
            }
            Some(("", upper)) => {
                let value = T::parse_token(upper).ok_or_else(fail)?;
                Ok(Self::new(T::MIN, value))
            }
            Some((lower, "")) => {
                let value = T::parse_token(lower).ok_or_else(fail)?;
                Ok(Self::new(value, T::MAX))
            }
            Some((lower, upper)) => {
                let min = T::parse_token(lower).ok_or_else(fail)?;
                let max = T::parse_token(upper).ok_or_else(fail)?;
                if max < min {
                    return Err(fail());
                }
                Ok(Self::new(min, max))
            }
        }
    }

    /// Closed-range membership check.
    pub fn check(&self, value: T) -> bool {
        value >= self.min && value <= self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_value_widens_per_mode() {
        assert_eq!(
            Interval::<i32>::parse("8", IntervalMode::Exact).unwrap(),
            Interval::new(8, 8)
        );
        assert_eq!(
            Interval::<i32>::parse("8", IntervalMode::AtMost).unwrap(),
            Interval::new(i32::MIN, 8)
        );
        assert_eq!(
            Interval::<i32>::parse("8", IntervalMode::AtLeast).unwrap(),
            Interval::new(8, i32::MAX)
        );
    }

    #[test]
    fn open_bounds_parse() {
        assert_eq!(
            Interval::<i32>::parse(":5", IntervalMode::Exact).unwrap(),
            Interval::new(i32::MIN, 5)
        );
        assert_eq!(
            Interval::<i32>::parse("5:", IntervalMode::Exact).unwrap(),
            Interval::new(5, i32::MAX)
        );
    }

    #[test]
    fn literal_range_parses_and_rejects_inverted_bounds() {
        assert_eq!(
            Interval::<i32>::parse("2:6", IntervalMode::Exact).unwrap(),
            Interval::new(2, 6)
        );
        assert!(Interval::<i32>::parse("6:2", IntervalMode::Exact).is_err());
    }

    #[test]
    fn garbage_and_empty_tokens_fail() {
        for text in ["", ":", "abc", "1.5x", "4:junk", "junk:4", "--3"] {
            assert!(
                Interval::<f32>::parse(text, IntervalMode::Exact).is_err(),
                "expected parse failure for {text:?}"
            );
        }
        assert!(Interval::<i32>::parse("1.5", IntervalMode::Exact).is_err());
    }

    #[test]
    fn integer_overflow_fails() {
        assert!(Interval::<i32>::parse("99999999999", IntervalMode::Exact).is_err());
    }

    #[test]
    fn float_overflow_and_non_finite_fail() {
        assert!(Interval::<f32>::parse("1e999", IntervalMode::Exact).is_err());
        assert!(Interval::<f32>::parse("inf", IntervalMode::Exact).is_err());
        assert!(Interval::<f32>::parse("nan:1", IntervalMode::Exact).is_err());
    }

    #[test]
    fn negative_values_parse() {
        assert_eq!(
            Interval::<f32>::parse("-2.5:3.5", IntervalMode::Exact).unwrap(),
            Interval::new(-2.5, 3.5)
        );
    }

    #[test]
    fn round_trips_for_representable_values() {
        let cases = [(-12, 40), (0, 0), (7, 7), (i32::MIN + 1, i32::MAX - 1)];
        for (min, max) in cases {
            let text = format!("{min}:{max}");
            let parsed = Interval::<i32>::parse(&text, IntervalMode::Exact).unwrap();
            assert_eq!((parsed.min, parsed.max), (min, max));
        }
        let fcases = [(-1.25_f32, 2.5_f32), (0.0, 1.1), (3.25, 3.25)];
        for (min, max) in fcases {
            let text = format!("{min}:{max}");
            let parsed = Interval::<f32>::parse(&text, IntervalMode::Exact).unwrap();
            assert_eq!((parsed.min, parsed.max), (min, max));
        }
    }

    #[test]
    fn check_is_closed_on_both_ends() {
        let interval = Interval::new(1.1_f32, 2.0);
        assert!(interval.check(1.1));
        assert!(interval.check(2.0));
        assert!(!interval.check(1.0999));
        assert!(!interval.check(2.0001));
    }

    #[test]
    fn full_interval_accepts_everything() {
        let interval = Interval::<i32>::full();
        assert!(interval.check(i32::MIN));
        assert!(interval.check(0));
        assert!(interval.check(i32::MAX));
    }
}
