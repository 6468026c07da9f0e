//! Week days - the days a player is available
//!
//! Externally an ordered list of integer day codes (`[0, 2, 4]`), stored as a
//! single delimited column (`"0,2,4"`). Codes are not range-checked; the list
//! keeps whatever order and duplicates the client sent.
//!
//! Elements are integers, so their text form can never contain the delimiter
//! and the stored form needs no escaping.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator used in the stored form
pub const DELIMITER: char = ',';

/// Ordered set of weekday codes
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeekDays(Vec<i32>);

/// Error when decoding the stored form
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid week day {element:?} in {stored:?}")]
pub struct WeekDaysError {
    pub stored: String,
    pub element: String,
}

impl WeekDays {
    pub fn new(days: Vec<i32>) -> Self {
        Self(days)
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.0
    }

    /// Join into the stored form; an empty set becomes `""`
    pub fn to_stored(&self) -> String {
        self.to_string()
    }

    /// Split the stored form back into day codes
    ///
    /// `""` decodes to an empty set. Surrounding whitespace of each element
    /// is ignored.
    pub fn from_stored(stored: &str) -> Result<Self, WeekDaysError> {
        if stored.trim().is_empty() {
            return Ok(Self::default());
        }

        stored
            .split(DELIMITER)
            .map(|element| {
                element.trim().parse::<i32>().map_err(|_| WeekDaysError {
                    stored: stored.to_string(),
                    element: element.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

impl fmt::Display for WeekDays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, day) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "{DELIMITER}")?;
            }
            write!(f, "{day}")?;
        }
        Ok(())
    }
}

impl From<Vec<i32>> for WeekDays {
    fn from(days: Vec<i32>) -> Self {
        Self(days)
    }
}

impl From<WeekDays> for Vec<i32> {
    fn from(days: WeekDays) -> Self {
        days.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_stored() {
        assert_eq!(WeekDays::new(vec![0, 2, 4]).to_stored(), "0,2,4");
        assert_eq!(WeekDays::new(vec![6]).to_stored(), "6");
        assert_eq!(WeekDays::default().to_stored(), "");
    }

    #[test]
    fn test_from_stored() {
        assert_eq!(
            WeekDays::from_stored("0,2,4").unwrap().as_slice(),
            &[0, 2, 4]
        );
        assert_eq!(WeekDays::from_stored(" 1, 3 ").unwrap().as_slice(), &[1, 3]);
        assert_eq!(WeekDays::from_stored("").unwrap(), WeekDays::default());
    }

    #[test]
    fn test_preserves_order_and_duplicates() {
        let days = WeekDays::new(vec![5, 1, 1, 0]);
        let back = WeekDays::from_stored(&days.to_stored()).unwrap();
        assert_eq!(back, days);
    }

    #[test]
    fn test_from_stored_rejects_garbage() {
        let err = WeekDays::from_stored("1,x,3").unwrap_err();
        assert_eq!(err.element, "x");
        assert_eq!(err.stored, "1,x,3");
        assert!(WeekDays::from_stored("1,,3").is_err());
    }

    #[test]
    fn test_serializes_as_array() {
        let days = WeekDays::new(vec![0, 6]);
        assert_eq!(serde_json::to_string(&days).unwrap(), "[0,6]");
    }
}
