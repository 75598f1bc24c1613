//! Common domain type definitions
//!
//! This module contains the enum types shared across the claim models to
//! ensure downstream logic never re-inspects raw field encodings.

use serde::{Deserialize, Serialize};

/// Gender of a beneficiary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Gender {
    /// Male gender
    Male,
    /// Female gender
    Female,
    /// Unknown or not specified
    #[default]
    Unknown,
}

impl From<&str> for Gender {
    fn from(s: &str) -> Self {
        let s = s.trim().to_lowercase();
        // Female is matched first: "female" contains "male" as a substring
        if s == "2" || s == "f" || s.contains("female") {
            Self::Female
        } else if s == "1" || s == "m" || s.contains("male") {
            Self::Male
        } else {
            Self::Unknown
        }
    }
}

impl From<i64> for Gender {
    fn from(value: i64) -> Self {
        match value {
            1 => Self::Male,
            2 => Self::Female,
            _ => Self::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Gender;

    #[test]
    fn test_gender_from_str() {
        assert_eq!(Gender::from("M"), Gender::Male);
        assert_eq!(Gender::from(" male "), Gender::Male);
        assert_eq!(Gender::from("1"), Gender::Male);
        assert_eq!(Gender::from("F"), Gender::Female);
        assert_eq!(Gender::from("Female"), Gender::Female);
        assert_eq!(Gender::from("2"), Gender::Female);
        assert_eq!(Gender::from(""), Gender::Unknown);
        assert_eq!(Gender::from("x"), Gender::Unknown);
    }

    #[test]
    fn test_gender_from_int() {
        assert_eq!(Gender::from(1), Gender::Male);
        assert_eq!(Gender::from(2), Gender::Female);
        assert_eq!(Gender::from(0), Gender::Unknown);
        assert_eq!(Gender::from(9), Gender::Unknown);
    }
}
