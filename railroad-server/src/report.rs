//! Demonstration report: a fixed set of questions asked of a network.
//!
//! The server prints this at startup and serves it at `/report`. Both
//! ask under the same stop bound that HTTP queries are held to.

use std::fmt;

use crate::network::{GraphError, Station};
use crate::railroad::Railroad;

/// Why a question got no answer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnswerError {
    /// The question needs a deeper enumeration than allowed
    #[error("{name} must be at most {limit}, got {value}")]
    DepthExceeded {
        name: &'static str,
        value: u64,
        limit: usize,
    },

    /// The network could not answer
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// A question the report asks of the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Question {
    /// Distance of an explicit route such as `A-B-C`
    RouteDistance(&'static str),

    /// Trips with at most `max_stop` stops
    TripsMaxStop {
        from: char,
        to: char,
        max_stop: usize,
    },

    /// Trips with exactly `count_stop` stops
    TripsExactStop {
        from: char,
        to: char,
        count_stop: usize,
    },

    /// Length of the shortest trip
    ShortestRoute { from: char, to: char },

    /// Trips shorter than `max_distance`
    RoutesMaxDistance {
        from: char,
        to: char,
        max_distance: u64,
    },
}

/// The questions asked of the sample network at startup.
pub const SAMPLE_QUESTIONS: &[Question] = &[
    Question::RouteDistance("A-B-C"),
    Question::RouteDistance("A-D"),
    Question::RouteDistance("A-D-C"),
    Question::RouteDistance("A-E-B-C-D"),
    Question::TripsMaxStop {
        from: 'C',
        to: 'C',
        max_stop: 3,
    },
    Question::TripsExactStop {
        from: 'A',
        to: 'C',
        count_stop: 4,
    },
    Question::ShortestRoute { from: 'A', to: 'C' },
    Question::ShortestRoute { from: 'B', to: 'B' },
    Question::RoutesMaxDistance {
        from: 'C',
        to: 'C',
        max_distance: 30,
    },
];

impl Question {
    /// Ask the question; the answer is a distance or a count.
    ///
    /// Questions whose stop bound exceeds `max_depth` are refused before
    /// any enumeration starts.
    pub fn answer(&self, railroad: &Railroad, max_depth: usize) -> Result<u64, AnswerError> {
        let too_deep = self.depth().filter(|&(_, value)| value > max_depth as u64);
        if let Some((name, value)) = too_deep {
            return Err(AnswerError::DepthExceeded {
                name,
                value,
                limit: max_depth,
            });
        }

        let station = |c: char| Station::from_char(c).map_err(GraphError::from);
        let answer = match *self {
            Question::RouteDistance(route) => railroad.route_distance(route)?,
            Question::TripsMaxStop { from, to, max_stop } => {
                railroad.count_trips_max_stop(station(from)?, station(to)?, max_stop) as u64
            }
            Question::TripsExactStop {
                from,
                to,
                count_stop,
            } => {
                railroad.count_trips_exact_stop(station(from)?, station(to)?, count_stop) as u64
            }
            Question::ShortestRoute { from, to } => {
                railroad.shortest_route_length(station(from)?, station(to)?)?
            }
            Question::RoutesMaxDistance {
                from,
                to,
                max_distance,
            } => {
                railroad.count_routes_max_distance(station(from)?, station(to)?, max_distance)?
                    as u64
            }
        };
        Ok(answer)
    }

    /// The stop bound this question enumerates under, if any.
    ///
    /// The distance bound doubles as the stop bound for
    /// [`RoutesMaxDistance`](Question::RoutesMaxDistance).
    fn depth(&self) -> Option<(&'static str, u64)> {
        match *self {
            Question::TripsMaxStop { max_stop, .. } => Some(("max_stops", max_stop as u64)),
            Question::TripsExactStop { count_stop, .. } => Some(("stops", count_stop as u64)),
            Question::RoutesMaxDistance { max_distance, .. } => {
                Some(("max_distance", max_distance))
            }
            Question::RouteDistance(_) | Question::ShortestRoute { .. } => None,
        }
    }

    fn unit(&self) -> &'static str {
        match self {
            Question::RouteDistance(_) | Question::ShortestRoute { .. } => "units",
            _ => "routes",
        }
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Question::RouteDistance(route) => write!(f, "The distance of the route {route}"),
            Question::TripsMaxStop { from, to, max_stop } => write!(
                f,
                "The number of trips starting at {from} and ending at {to} with a maximum of {max_stop} stops"
            ),
            Question::TripsExactStop {
                from,
                to,
                count_stop,
            } => write!(
                f,
                "The number of trips starting at {from} and ending at {to} with exactly {count_stop} stops"
            ),
            Question::ShortestRoute { from, to } => write!(
                f,
                "The length of the shortest route (in terms of distance to travel) from {from} to {to}"
            ),
            Question::RoutesMaxDistance {
                from,
                to,
                max_distance,
            } => write!(
                f,
                "The number of different routes from {from} to {to} with a distance of less than {max_distance}"
            ),
        }
    }
}

/// A question with its answer.
#[derive(Debug, Clone)]
pub struct ReportLine {
    pub question: Question,
    pub answer: Result<u64, AnswerError>,
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.answer {
            Ok(value) => write!(f, "*** {} is: {} {}", self.question, value, self.question.unit()),
            Err(e) => write!(f, "*** {} failed: {}", self.question, e),
        }
    }
}

/// Answers to a list of questions. A failing question does not stop the
/// others from being asked.
#[derive(Debug, Clone)]
pub struct Report {
    lines: Vec<ReportLine>,
}

impl Report {
    /// Ask every question of `railroad`, refusing those deeper than
    /// `max_depth` stops.
    pub fn run(railroad: &Railroad, questions: &[Question], max_depth: usize) -> Self {
        let lines = questions
            .iter()
            .map(|question| ReportLine {
                question: *question,
                answer: question.answer(railroad, max_depth),
            })
            .collect();
        Self { lines }
    }

    /// Ask the startup demonstration questions.
    pub fn sample(railroad: &Railroad, max_depth: usize) -> Self {
        Self::run(railroad, SAMPLE_QUESTIONS, max_depth)
    }

    pub fn lines(&self) -> &[ReportLine] {
        &self.lines
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
