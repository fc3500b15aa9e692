//! Category ids for category-scoped requests.

use std::fmt;
use std::str::FromStr;

use crate::error::InvalidParameterError;

/// A numeric Walmart taxonomy category id.
///
/// Feed operations accept anything that converts into a `CategoryId`.
/// Unsigned integers convert infallibly and signed ones when non-negative.
/// Strings and floats always fail the conversion, even `"3944"` or
/// `3944.0`, so a loosely typed argument is rejected before any request is
/// built. Text ids must be parsed explicitly with [`str::parse`].
///
/// # Example
///
/// ```rust
/// use walmart_api::CategoryId;
///
/// let id = CategoryId::from(3944u64);
/// assert_eq!(id.to_string(), "3944");
///
/// assert!(CategoryId::try_from("3944").is_err());
/// assert!(CategoryId::try_from(3944.0_f64).is_err());
/// assert_eq!("3944".parse::<CategoryId>().unwrap(), id);
/// assert!("electronics".parse::<CategoryId>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CategoryId(u64);

impl CategoryId {
    /// Query parameter name.
    pub const PARAM: &'static str = "categoryId";

    /// Creates a category id.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the numeric id.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for CategoryId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<u32> for CategoryId {
    fn from(id: u32) -> Self {
        Self(u64::from(id))
    }
}

impl TryFrom<i64> for CategoryId {
    type Error = InvalidParameterError;

    fn try_from(id: i64) -> Result<Self, Self::Error> {
        u64::try_from(id)
            .map(Self)
            .map_err(|_| InvalidParameterError::InvalidCategory {
                value: id.to_string(),
            })
    }
}

impl TryFrom<i32> for CategoryId {
    type Error = InvalidParameterError;

    fn try_from(id: i32) -> Result<Self, Self::Error> {
        Self::try_from(i64::from(id))
    }
}

impl FromStr for CategoryId {
    type Err = InvalidParameterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|_| InvalidParameterError::InvalidCategory {
                value: s.to_string(),
            })
    }
}

// Strings are never category ids, even when numeric.
impl TryFrom<&str> for CategoryId {
    type Error = InvalidParameterError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Err(InvalidParameterError::InvalidCategory {
            value: value.to_string(),
        })
    }
}

impl TryFrom<String> for CategoryId {
    type Error = InvalidParameterError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Err(InvalidParameterError::InvalidCategory { value })
    }
}

impl TryFrom<f64> for CategoryId {
    type Error = InvalidParameterError;

    // Floats are never category ids, even when integral.
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Err(InvalidParameterError::InvalidCategory {
            value: value.to_string(),
        })
    }
}

impl TryFrom<f32> for CategoryId {
    type Error = InvalidParameterError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Self::try_from(f64::from(value))
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers_convert() {
        assert_eq!(CategoryId::from(976_759_u64).get(), 976_759);
        assert_eq!(CategoryId::from(3944_u32).get(), 3944);
        assert_eq!(CategoryId::try_from(5438_i64).unwrap().get(), 5438);
    }

    #[test]
    fn test_negative_integer_is_rejected() {
        assert!(matches!(
            CategoryId::try_from(-1_i32),
            Err(InvalidParameterError::InvalidCategory { value }) if value == "-1"
        ));
    }

    #[test]
    fn test_strings_never_convert() {
        for value in ["3944", " 3944 ", "electronics", "39.5", ""] {
            assert!(matches!(
                CategoryId::try_from(value),
                Err(InvalidParameterError::InvalidCategory { .. })
            ));
        }
        assert!(matches!(
            CategoryId::try_from("3944".to_string()),
            Err(InvalidParameterError::InvalidCategory { value }) if value == "3944"
        ));
    }

    #[test]
    fn test_parse_accepts_numeric_text() {
        assert_eq!(
            " 3944 ".parse::<CategoryId>().unwrap(),
            CategoryId::new(3944)
        );
        assert!(matches!(
            "electronics".parse::<CategoryId>(),
            Err(InvalidParameterError::InvalidCategory { value }) if value == "electronics"
        ));
        assert!("39.5".parse::<CategoryId>().is_err());
        assert!("-1".parse::<CategoryId>().is_err());
    }

    #[test]
    fn test_floats_are_rejected() {
        assert!(CategoryId::try_from(3944.0_f64).is_err());
        assert!(CategoryId::try_from(1.5_f32).is_err());
    }
}
