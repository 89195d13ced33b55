//! Number literal parsing: sign, integer part, fraction, exponent.

use crate::error::ParseError;
use crate::Result;

use super::Parser;

impl Parser<'_> {
    /// Accumulates the literal left to right in double precision. A
    /// leading `0` is consumed alone (no leading-zeros rule); whatever
    /// follows is left for the caller.
    pub(crate) fn parse_number(&mut self) -> Result<f64> {
        let mut sign = 1.0;
        if self.peek() == b'-' {
            sign = -1.0;
            self.pos += 1;
        }
        if !self.peek().is_ascii_digit() {
            // A '-' with no digit following it, since dispatch guarantees
            // the first byte was '-' or a digit.
            return Err(ParseError::ExpectedDigit { index: self.pos });
        }

        let mut value = 0.0f64;
        if self.peek() == b'0' {
            self.pos += 1;
        } else {
            while self.peek().is_ascii_digit() {
                value = value * 10.0 + f64::from(self.peek() - b'0');
                self.pos += 1;
            }
        }

        if self.peek() == b'.' {
            self.pos += 1;
            if !self.peek().is_ascii_digit() {
                return Err(ParseError::ExpectedFractionDigit { index: self.pos });
            }
            let mut weight = 0.1;
            while self.peek().is_ascii_digit() {
                value += weight * f64::from(self.peek() - b'0');
                weight *= 0.1;
                self.pos += 1;
            }
        }

        if matches!(self.peek(), b'e' | b'E') {
            self.pos += 1;
            if self.at_end() {
                return Err(ParseError::ExpectedExponent { index: self.pos });
            }
            let exp_sign = if self.peek() == b'-' { -1.0 } else { 1.0 };
            if matches!(self.peek(), b'-' | b'+') {
                self.pos += 1;
            }
            if !self.peek().is_ascii_digit() {
                return Err(ParseError::ExpectedDigit { index: self.pos });
            }
            let mut exp = 0.0f64;
            while self.peek().is_ascii_digit() {
                exp = exp * 10.0 + f64::from(self.peek() - b'0');
                self.pos += 1;
            }
            value *= 10.0f64.powf(exp * exp_sign);
        }

        Ok(sign * value)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::ParseError;
    use crate::{parse, parse_prefix};

    fn parsed_number(input: &str) -> f64 {
        parse(input).unwrap().as_f64().unwrap()
    }

    #[rstest::rstest]
    #[case("0", 0.0)]
    #[case("1", 1.0)]
    #[case("42", 42.0)]
    #[case("-17", -17.0)]
    #[case("2.5", 2.5)]
    #[case("-0.125", -0.125)]
    #[case("0.5", 0.5)]
    fn test_plain_numbers(#[case] input: &str, #[case] expected: f64) {
        assert_eq!(parsed_number(input), expected);
    }

    #[rstest::rstest]
    #[case("1e2", 100.0)]
    #[case("1E2", 100.0)]
    #[case("1e+2", 100.0)]
    #[case("25e-1", 2.5)]
    #[case("-1.5e3", -1500.0)]
    fn test_exponents(#[case] input: &str, #[case] expected: f64) {
        let got = parsed_number(input);
        assert!((got - expected).abs() <= expected.abs() * 1e-12);
    }

    #[rstest::rstest]
    fn test_fraction_accumulates_by_weight() {
        assert!((parsed_number("3.14159") - 3.14159).abs() < 1e-12);
    }

    #[rstest::rstest]
    fn test_negative_zero_keeps_its_sign() {
        let value = parsed_number("-0");
        assert_eq!(value, 0.0);
        assert!(value.is_sign_negative());
    }

    #[rstest::rstest]
    fn test_minus_alone() {
        assert_eq!(parse("-"), Err(ParseError::ExpectedDigit { index: 1 }));
        assert_eq!(parse("-x"), Err(ParseError::ExpectedDigit { index: 1 }));
    }

    #[rstest::rstest]
    fn test_fraction_requires_digit() {
        assert_eq!(
            parse("1."),
            Err(ParseError::ExpectedFractionDigit { index: 2 })
        );
        assert_eq!(
            parse("-0.x"),
            Err(ParseError::ExpectedFractionDigit { index: 3 })
        );
    }

    #[rstest::rstest]
    fn test_exponent_errors() {
        // 'e' as the last byte of the input.
        assert_eq!(parse("1e"), Err(ParseError::ExpectedExponent { index: 2 }));
        // 'e' followed by something that is not a digit.
        assert_eq!(parse("1ex"), Err(ParseError::ExpectedDigit { index: 2 }));
        assert_eq!(parse("1e-"), Err(ParseError::ExpectedDigit { index: 3 }));
        assert_eq!(parse("1e+q"), Err(ParseError::ExpectedDigit { index: 3 }));
    }

    #[rstest::rstest]
    fn test_leading_zero_consumes_one_digit() {
        let (value, consumed) = parse_prefix("0123").unwrap();
        assert_eq!(value.as_f64(), Some(0.0));
        assert_eq!(consumed, 1);

        // But a fraction may still follow the single zero.
        assert_eq!(parsed_number("0.25"), 0.25);
    }
}
