//! Station identifier type.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Error returned when parsing an invalid station symbol.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station {input:?}: {reason}")]
pub struct InvalidStation {
    input: String,
    reason: &'static str,
}

impl InvalidStation {
    fn new(input: impl Into<String>, reason: &'static str) -> Self {
        Self {
            input: input.into(),
            reason,
        }
    }
}

/// A railroad station, identified by a single ASCII letter.
///
/// Only `A`-`Z` are stations. Other alphabetic characters such as `Ä` are
/// rejected, so a network has at most 26 stations.
///
/// Stations are case-insensitive: the symbol is normalized to uppercase
/// on construction, so `Station::parse("a")` and `Station::parse("A")`
/// compare equal.
///
/// # Examples
///
/// ```
/// use railroad_server::network::Station;
///
/// let a = Station::parse("a").unwrap();
/// assert_eq!(a.as_char(), 'A');
/// assert_eq!(a, Station::parse("A").unwrap());
///
/// // Digits and multi-letter names are rejected
/// assert!(Station::parse("1").is_err());
/// assert!(Station::parse("AB").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Station(u8);

impl Station {
    /// Build a station from a single character.
    ///
    /// The character must be an ASCII letter; lowercase is accepted and
    /// normalized.
    pub fn from_char(c: char) -> Result<Self, InvalidStation> {
        if !c.is_ascii_alphabetic() {
            return Err(InvalidStation::new(c, "must be a letter A-Z"));
        }
        Ok(Station(c.to_ascii_uppercase() as u8))
    }

    /// Parse a station from a string.
    ///
    /// Surrounding whitespace is ignored; what remains must be exactly one
    /// ASCII letter.
    pub fn parse(s: &str) -> Result<Self, InvalidStation> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c).map_err(|e| InvalidStation {
                input: s.into(),
                ..e
            }),
            (None, _) => Err(InvalidStation::new(s, "must not be empty")),
            (Some(_), Some(_)) => Err(InvalidStation::new(s, "must be a single letter")),
        }
    }

    /// Returns the uppercase station symbol.
    pub fn as_char(self) -> char {
        self.0 as char
    }
}

impl fmt::Debug for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Station({})", self.as_char())
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl Serialize for Station {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Station {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Station::parse(&s).map_err(serde::de::Error::custom)
    }
}
