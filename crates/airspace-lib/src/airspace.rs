use std::cmp::Ordering;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::geo::Coordinate;

/// Numeric identifier for a navigation point.
pub type PointNumber = i64;

/// Minimum Jaro-Winkler similarity before a name is offered as a suggestion.
const FUZZY_MATCH_THRESHOLD: f64 = 0.7;

/// Named navigation fix at a fixed geographic position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavPoint {
    pub number: PointNumber,
    pub name: String,
    pub position: Coordinate,
}

impl NavPoint {
    /// Build a point from its raw fields.
    pub fn new(
        number: PointNumber,
        name: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            number,
            name: name.into(),
            position: Coordinate {
                latitude,
                longitude,
            },
        }
    }
}

/// Directed segment connecting two navigation points.
///
/// `distance` is the published cost of flying the segment. Endpoints are
/// stored by number; a segment whose endpoints do not both resolve is
/// skipped by every traversal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavSegment {
    pub origin_number: PointNumber,
    pub destination_number: PointNumber,
    pub distance: f64,
}

/// Airport with its published standard instrument departures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavAirport {
    pub name: String,
    /// Departure fixes associated with the airport, by point number.
    pub sids: Vec<PointNumber>,
}

/// In-memory model of one loaded airspace dataset.
///
/// The airspace owns every point, segment, and airport handed to
/// [`AirSpace::load`] and keeps two indices over the point collection,
/// one by number and one by name. Queries are read-only; the only
/// mutation is a `load`, which replaces all prior state and invalidates
/// previously returned references.
#[derive(Debug, Clone, Default)]
pub struct AirSpace {
    nav_points: Vec<NavPoint>,
    nav_segments: Vec<NavSegment>,
    nav_airports: Vec<NavAirport>,
    number_index: HashMap<PointNumber, usize>,
    name_index: HashMap<String, usize>,
}

impl AirSpace {
    /// Replace the loaded dataset with already-parsed collections.
    ///
    /// Both lookup indices are rebuilt from scratch. Callers must not run
    /// queries concurrently with a load; the airspace takes no locks.
    pub fn load(
        &mut self,
        points: Vec<NavPoint>,
        segments: Vec<NavSegment>,
        airports: Vec<NavAirport>,
    ) {
        debug!(
            points = points.len(),
            segments = segments.len(),
            airports = airports.len(),
            "loading airspace dataset"
        );

        let mut number_index = HashMap::with_capacity(points.len());
        let mut name_index = HashMap::with_capacity(points.len());
        for (slot, point) in points.iter().enumerate() {
            if number_index.insert(point.number, slot).is_some() {
                warn!(number = point.number, "duplicate point number, keeping the latest entry");
            }
            if name_index.insert(point.name.clone(), slot).is_some() {
                warn!(name = %point.name, "duplicate point name, keeping the latest entry");
            }
        }

        let dangling = segments
            .iter()
            .filter(|segment| {
                !number_index.contains_key(&segment.origin_number)
                    || !number_index.contains_key(&segment.destination_number)
            })
            .count();
        if dangling > 0 {
            warn!(dangling, "segments reference unknown points and are unusable in traversal");
        }

        self.nav_points = points;
        self.nav_segments = segments;
        self.nav_airports = airports;
        self.number_index = number_index;
        self.name_index = name_index;
    }

    /// Loaded navigation points, in load order.
    pub fn nav_points(&self) -> &[NavPoint] {
        &self.nav_points
    }

    /// Loaded directed segments, in load order.
    pub fn nav_segments(&self) -> &[NavSegment] {
        &self.nav_segments
    }

    /// Loaded airports, in load order.
    pub fn nav_airports(&self) -> &[NavAirport] {
        &self.nav_airports
    }

    /// Lookup a point by its unique number.
    pub fn point_by_number(&self, number: PointNumber) -> Option<&NavPoint> {
        self.number_index
            .get(&number)
            .and_then(|&slot| self.nav_points.get(slot))
    }

    /// Lookup a point by its case-sensitive name.
    pub fn point_by_name(&self, name: &str) -> Option<&NavPoint> {
        self.name_index
            .get(name)
            .and_then(|&slot| self.nav_points.get(slot))
    }

    /// Lookup an airport by its exact name.
    pub fn airport_by_name(&self, name: &str) -> Option<&NavAirport> {
        self.nav_airports.iter().find(|airport| airport.name == name)
    }

    /// Resolve the departure fixes published for an airport.
    ///
    /// SIDs referencing points missing from the dataset are skipped.
    pub fn departures(&self, airport: &NavAirport) -> Vec<&NavPoint> {
        airport
            .sids
            .iter()
            .filter_map(|&number| self.point_by_number(number))
            .collect()
    }

    /// Return up to `limit` point names similar to `name`, best match first.
    pub fn fuzzy_point_matches(&self, name: &str, limit: usize) -> Vec<String> {
        let mut scored: Vec<(f64, &str)> = self
            .nav_points
            .iter()
            .map(|point| (strsim::jaro_winkler(name, &point.name), point.name.as_str()))
            .filter(|(similarity, _)| *similarity >= FUZZY_MATCH_THRESHOLD)
            .collect();

        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));

        scored
            .into_iter()
            .take(limit)
            .map(|(_, candidate)| candidate.to_string())
            .collect()
    }
}
