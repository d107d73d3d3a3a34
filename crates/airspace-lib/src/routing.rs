//! Name-resolving query layer for airspace consumers.
//!
//! This module provides:
//! - [`RouteRequest`] - Lowest-cost path request between two named points
//! - [`RoutePlan`] - Planned route result
//! - [`plan_route`] - Main entry point for computing routes
//! - [`reachable_points`] / [`nearest_point`] - Name- and error-aware
//!   wrappers over the remaining queries
//!
//! The algorithms themselves live in [`crate::search`] and operate on
//! resolved point references; this layer resolves names, maps absence
//! onto the library error taxonomy, and shapes results for serialization.

use serde::Serialize;
use tracing::debug;

use crate::airspace::{AirSpace, NavPoint, PointNumber};
use crate::error::{Error, Result};
use crate::geo::Coordinate;
use crate::search;

/// Lowest-cost path request between two named points.
#[derive(Debug, Clone)]
pub struct RouteRequest {
    pub origin: String,
    pub destination: String,
}

impl RouteRequest {
    /// Convenience constructor taking any string-like names.
    pub fn new(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
        }
    }
}

/// Planned route returned by the library.
#[derive(Debug, Clone, Serialize)]
pub struct RoutePlan {
    pub origin: PointNumber,
    pub destination: PointNumber,
    /// Point numbers along the route, origin first.
    pub steps: Vec<PointNumber>,
    /// Sum of the traversed segment distances.
    pub cost: f64,
}

impl RoutePlan {
    /// Number of hops in the route.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

/// Compute the lowest-cost route between the requested points.
///
/// Resolves both names, runs the path search, and reports exhaustion of
/// the frontier as [`Error::RouteNotFound`]. A request whose origin and
/// destination name the same point yields a single-step plan at cost
/// zero.
pub fn plan_route(airspace: &AirSpace, request: &RouteRequest) -> Result<RoutePlan> {
    let origin = resolve_point(airspace, &request.origin)?;
    let destination = resolve_point(airspace, &request.destination)?;

    let found = search::shortest_path(airspace, origin, destination).ok_or_else(|| {
        Error::RouteNotFound {
            origin: request.origin.clone(),
            destination: request.destination.clone(),
        }
    })?;

    let plan = RoutePlan {
        origin: origin.number,
        destination: destination.number,
        steps: found.points.iter().map(|point| point.number).collect(),
        cost: found.cost,
    };
    debug!(hops = plan.hop_count(), cost = plan.cost, "planned route");

    Ok(plan)
}

/// Every point reachable from the named start, including the start itself.
pub fn reachable_points<'a>(airspace: &'a AirSpace, origin: &str) -> Result<Vec<&'a NavPoint>> {
    let start = resolve_point(airspace, origin)?;
    Ok(search::reachable_points(airspace, start))
}

/// The loaded point closest to `target`.
///
/// Unlike the lookup methods, an empty airspace is an error here: with no
/// points loaded the query itself cannot be answered.
pub fn nearest_point(airspace: &AirSpace, target: Coordinate) -> Result<&NavPoint> {
    search::nearest_point(airspace, target).ok_or(Error::EmptyAirspace)
}

/// Resolve a point name, attaching close matches when the lookup fails.
fn resolve_point<'a>(airspace: &'a AirSpace, name: &str) -> Result<&'a NavPoint> {
    airspace.point_by_name(name).ok_or_else(|| {
        let suggestions = airspace.fuzzy_point_matches(name, 3);
        Error::UnknownPoint {
            name: name.to_string(),
            suggestions,
        }
    })
}
