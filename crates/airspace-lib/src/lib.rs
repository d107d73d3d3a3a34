//! Airspace graph library entry points.
//!
//! This crate models a loaded airspace (navigation points, directed
//! segments, and airports with their departure fixes) and answers three
//! queries over it: the point nearest to a coordinate, the set of points
//! reachable from a point, and the lowest-cost path between two named
//! points. Loaders and presentation layers should depend on the types
//! exported here instead of reimplementing the queries.
//!

#![deny(warnings)]

pub mod airspace;
pub mod error;
pub mod geo;
pub mod routing;
pub mod search;

pub use airspace::{AirSpace, NavAirport, NavPoint, NavSegment, PointNumber};
pub use error::{Error, Result};
pub use geo::Coordinate;
pub use routing::{nearest_point, plan_route, reachable_points, RoutePlan, RouteRequest};
pub use search::{shortest_path, PathFound};
