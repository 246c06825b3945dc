//! Edge tokens of the network description notation.

use super::Station;
use super::error::{NodeError, StationRole};

/// A directed, weighted connection between two distinct stations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub departure: Station,
    pub arrival: Station,
    pub distance: u32,
}

impl Edge {
    /// Parse a single edge token such as `AB5`.
    ///
    /// Accepts raw tokens as well as ones already passed through
    /// [`clean_description`], so the token is uppercased first. It must hold
    /// a departure letter, an arrival letter and one or more digits, with
    /// departure ≠ arrival.
    pub fn parse(token: &str) -> Result<Self, NodeError> {
        let token = token.to_uppercase();
        let chars: Vec<char> = token.chars().collect();

        if chars.len() < 3 {
            return Err(NodeError::TooShort {
                len: chars.len(),
                token,
            });
        }

        let departure = parse_station(StationRole::Departure, chars[0], &token)?;
        let arrival = parse_station(StationRole::Arrival, chars[1], &token)?;
        if departure == arrival {
            return Err(NodeError::SelfLoop { token });
        }

        let distance: String = chars[2..].iter().collect();
        // `u32::from_str` would also take a leading '+'
        if !distance.chars().all(|c| c.is_ascii_digit()) {
            return Err(NodeError::BadDistance { distance, token });
        }
        let Ok(distance) = distance.parse::<u32>() else {
            return Err(NodeError::BadDistance { distance, token });
        };

        Ok(Edge {
            departure,
            arrival,
            distance,
        })
    }
}

fn parse_station(role: StationRole, symbol: char, token: &str) -> Result<Station, NodeError> {
    Station::from_char(symbol).map_err(|_| NodeError::NotAlphabetic {
        role,
        symbol,
        token: token.to_string(),
    })
}

/// Normalize a network description into whitespace-separated tokens.
///
/// Every non-alphanumeric character becomes a space and letters are
/// uppercased, so `"ab4-CD2,JE20"` becomes `"AB4 CD2 JE20"`.
pub fn clean_description(description: &str) -> String {
    let mut cleaned = String::with_capacity(description.len());
    for c in description.chars() {
        if c.is_alphanumeric() {
            cleaned.extend(c.to_uppercase());
        } else {
            cleaned.push(' ');
        }
    }
    cleaned
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station(c: char) -> Station {
        Station::from_char(c).unwrap()
    }

    #[test]
    fn parse_valid_edge() {
        let edge = Edge::parse("AB5").unwrap();
        assert_eq!(edge.departure, station('A'));
        assert_eq!(edge.arrival, station('B'));
        assert_eq!(edge.distance, 5);
    }

    #[test]
    fn parse_multi_digit_distance() {
        let edge = Edge::parse("JE20").unwrap();
        assert_eq!(edge.distance, 20);

        let edge = Edge::parse("xy0").unwrap();
        assert_eq!(edge.departure, station('X'));
        assert_eq!(edge.distance, 0);
    }

    #[test]
    fn parse_raw_lowercase_token() {
        // Not passed through clean_description first
        assert_eq!(Edge::parse("ab5"), Edge::parse("AB5"));
        assert!(matches!(
            Edge::parse("äb5"),
            Err(NodeError::NotAlphabetic {
                role: StationRole::Departure,
                symbol: 'Ä',
                ..
            })
        ));
    }

    #[test]
    fn reject_short_token() {
        assert_eq!(
            Edge::parse("AB"),
            Err(NodeError::TooShort {
                token: "AB".into(),
                len: 2
            })
        );
        assert!(matches!(Edge::parse(""), Err(NodeError::TooShort { len: 0, .. })));
    }

    #[test]
    fn reject_non_letter_stations() {
        assert!(matches!(
            Edge::parse("1B5"),
            Err(NodeError::NotAlphabetic {
                role: StationRole::Departure,
                symbol: '1',
                ..
            })
        ));
        assert!(matches!(
            Edge::parse("A25"),
            Err(NodeError::NotAlphabetic {
                role: StationRole::Arrival,
                symbol: '2',
                ..
            })
        ));
    }

    #[test]
    fn reject_self_loop() {
        assert!(matches!(Edge::parse("AA5"), Err(NodeError::SelfLoop { .. })));
        assert!(matches!(Edge::parse("aA5"), Err(NodeError::SelfLoop { .. })));
    }

    #[test]
    fn reject_bad_distance() {
        assert!(matches!(Edge::parse("ABC"), Err(NodeError::BadDistance { .. })));
        assert!(matches!(Edge::parse("AB5C"), Err(NodeError::BadDistance { .. })));
        assert!(matches!(Edge::parse("AB+5"), Err(NodeError::BadDistance { .. })));
        assert!(matches!(
            Edge::parse("AB99999999999"),
            Err(NodeError::BadDistance { .. })
        ));
    }

    #[test]
    fn clean_replaces_separators() {
        assert_eq!(clean_description("AB4-CD2-JE20"), "AB4 CD2 JE20");
        assert_eq!(clean_description("ab5, bc4"), "AB5  BC4");
        assert_eq!(clean_description(""), "");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for valid edge tokens with distinct endpoints
    fn valid_edge() -> impl Strategy<Value = (char, char, u32)> {
        (
            proptest::char::range('A', 'Z'),
            proptest::char::range('A', 'Z'),
            0u32..10_000,
        )
            .prop_filter("distinct endpoints", |(d, a, _)| d != a)
    }

    proptest! {
        /// A formatted token parses back to its parts
        #[test]
        fn parses_formatted_token((d, a, n) in valid_edge()) {
            let edge = Edge::parse(&format!("{d}{a}{n}")).unwrap();
            prop_assert_eq!(edge.departure.as_char(), d);
            prop_assert_eq!(edge.arrival.as_char(), a);
            prop_assert_eq!(edge.distance, n);
        }

        /// Case never matters
        #[test]
        fn case_insensitive((d, a, n) in valid_edge()) {
            let upper = Edge::parse(&format!("{d}{a}{n}")).unwrap();
            let lower = Edge::parse(&format!("{d}{a}{n}").to_lowercase()).unwrap();
            prop_assert_eq!(upper, lower);
        }

        /// Cleaning leaves only alphanumerics and spaces
        #[test]
        fn cleaned_is_alphanumeric(s in "[ -~]{0,40}") {
            let cleaned = clean_description(&s);
            prop_assert!(cleaned.chars().all(|c| c == ' ' || c.is_alphanumeric()));
        }
    }
}
