//! Parsing of free-form coordinate input such as `"1.2, -3.4, 5.6"`

use crate::error::{Error, Result};
use crate::models::Point;

/// Parse a point from text.
///
/// Tokens are separated by a comma (with optional surrounding whitespace) or
/// by whitespace alone. Exactly three tokens are required and each must be a
/// finite number. Surrounding whitespace is ignored.
pub fn parse_coordinates(input: &str) -> Result<Point> {
    let format_error = || Error::CoordinateFormat { input: input.to_string() };

    let mut values = Vec::with_capacity(3);
    for part in input.trim().split(',') {
        let part = part.trim();
        if part.is_empty() {
            return Err(format_error());
        }
        for token in part.split_whitespace() {
            let value: f64 = token.parse().map_err(|_| format_error())?;
            if !value.is_finite() {
                return Err(format_error());
            }
            values.push(value);
        }
    }

    match values.as_slice() {
        [x, y, z] => Ok(Point::new(*x, *y, *z)),
        _ => Err(format_error()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comma_separated() {
        assert_eq!(parse_coordinates("1.2, -3.4, 5.6").unwrap(), Point::new(1.2, -3.4, 5.6));
        assert_eq!(parse_coordinates("1,2,2").unwrap(), Point::new(1.0, 2.0, 2.0));
    }

    #[test]
    fn test_whitespace_separated() {
        assert_eq!(parse_coordinates("1.2 -3.4 5.6").unwrap(), Point::new(1.2, -3.4, 5.6));
        assert_eq!(parse_coordinates("  1\t2   3 ").unwrap(), Point::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_mixed_separators() {
        assert_eq!(parse_coordinates("1 , 2 3").unwrap(), Point::new(1.0, 2.0, 3.0));
        assert_eq!(parse_coordinates("1e2,0,-0.5").unwrap(), Point::new(100.0, 0.0, -0.5));
    }

    #[test]
    fn test_rejects_non_numeric() {
        let err = parse_coordinates("1, a, 2").unwrap_err();
        assert!(matches!(err, Error::CoordinateFormat { ref input } if input == "1, a, 2"));
    }

    #[test]
    fn test_rejects_wrong_count() {
        assert!(parse_coordinates("1, 2").is_err());
        assert!(parse_coordinates("1, 2, 3, 4").is_err());
        assert!(parse_coordinates("").is_err());
        assert!(parse_coordinates("   ").is_err());
    }

    #[test]
    fn test_rejects_empty_token() {
        assert!(parse_coordinates("1,,2").is_err());
        assert!(parse_coordinates("1, 2, 3,").is_err());
    }

    #[test]
    fn test_rejects_non_finite() {
        assert!(parse_coordinates("NaN, 0, 0").is_err());
        assert!(parse_coordinates("inf 0 0").is_err());
    }
}
