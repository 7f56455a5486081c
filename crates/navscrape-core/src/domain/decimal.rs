use crate::ValidationError;

const CURRENCY_SYMBOLS: [char; 3] = ['€', '$', '£'];
const CURRENCY_CODES: [&str; 1] = ["EUR"];

/// Parses a locale-formatted numeral such as `26,042` or `€ 26,042`.
///
/// A single separator (comma or point) is always the decimal point; thousands
/// grouping is not recognised, so `1.234,56` is rejected.
pub fn parse_decimal(token: &str) -> Result<f64, ValidationError> {
    let malformed = || ValidationError::MalformedNumber {
        token: token.to_owned(),
    };

    let residual = strip_currency(token);
    if residual.is_empty() {
        return Err(malformed());
    }

    let mut separator = None;
    for (index, ch) in residual.char_indices() {
        match ch {
            '0'..='9' => {}
            ',' | '.' if separator.is_none() => separator = Some(index),
            _ => return Err(malformed()),
        }
    }

    if let Some(index) = separator {
        // digits are required on both sides of the separator
        if index == 0 || index + 1 == residual.len() {
            return Err(malformed());
        }
    }

    residual
        .replacen(',', ".", 1)
        .parse::<f64>()
        .map_err(|_| malformed())
}

fn strip_currency(token: &str) -> &str {
    let mut residual = token.trim_matches(is_padding);
    loop {
        let before = residual;
        for code in CURRENCY_CODES {
            if let Some(rest) = residual.strip_prefix(code) {
                residual = rest;
            }
            if let Some(rest) = residual.strip_suffix(code) {
                residual = rest;
            }
        }
        residual = residual.trim_matches(is_padding);
        if residual == before {
            return residual;
        }
    }
}

fn is_padding(ch: char) -> bool {
    ch.is_whitespace() || CURRENCY_SYMBOLS.contains(&ch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_comma_decimal() {
        let value = parse_decimal("26,042").expect("must parse");
        assert_eq!(value, 26.042);
    }

    #[test]
    fn strips_currency_symbol_and_whitespace() {
        assert_eq!(parse_decimal("€ 34,509").expect("must parse"), 34.509);
        assert_eq!(parse_decimal(" 12,849 €\u{a0}").expect("must parse"), 12.849);
        assert_eq!(parse_decimal("EUR 15,4").expect("must parse"), 15.4);
    }

    #[test]
    fn accepts_integers_and_point_separator() {
        assert_eq!(parse_decimal("26").expect("must parse"), 26.0);
        assert_eq!(parse_decimal("26.5").expect("must parse"), 26.5);
    }

    #[test]
    fn comma_tokens_match_point_parsing() {
        for (integer, fraction) in [("0", "001"), ("15", "234"), ("1234", "5"), ("7", "0000")] {
            let token = format!("{integer},{fraction}");
            let expected = format!("{integer}.{fraction}")
                .parse::<f64>()
                .expect("reference parse");
            assert_eq!(parse_decimal(&token).expect("must parse"), expected);
        }
    }

    #[test]
    fn rejects_malformed_tokens() {
        for token in ["", "€", "1.234,56", "12,,3", "abc", "12a", ",5", "5,", "-3,2", "inf", "1e5"] {
            let err = parse_decimal(token).expect_err("must fail");
            assert!(
                matches!(err, ValidationError::MalformedNumber { .. }),
                "unexpected error for '{token}': {err:?}"
            );
        }
    }
}
