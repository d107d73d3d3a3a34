use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet, VecDeque};

use crate::airspace::{AirSpace, NavPoint, PointNumber};
use crate::geo::Coordinate;

/// Find the navigation point closest to an arbitrary coordinate.
///
/// Runs a linear scan over the loaded points; ties resolve to the first
/// point in load order. Returns `None` when no points are loaded.
pub fn nearest_point(airspace: &AirSpace, target: Coordinate) -> Option<&NavPoint> {
    airspace.nav_points().iter().min_by(|a, b| {
        compare_distance(
            a.position.distance_to(&target),
            b.position.distance_to(&target),
        )
    })
}

/// Direct successors of `point`, paired with the segment distance.
///
/// Only outgoing segments count; segments whose destination does not
/// resolve are skipped.
pub fn neighbours<'a>(airspace: &'a AirSpace, point: &NavPoint) -> Vec<(&'a NavPoint, f64)> {
    airspace
        .nav_segments()
        .iter()
        .filter(|segment| segment.origin_number == point.number)
        .filter_map(|segment| {
            airspace
                .point_by_number(segment.destination_number)
                .map(|next| (next, segment.distance))
        })
        .collect()
}

/// Collect every point reachable from `start` along directed segments,
/// including `start` itself.
///
/// Breadth-first traversal with a visited set keyed by point number, so
/// each point is expanded at most once and cyclic graphs terminate. The
/// result is returned in load order.
pub fn reachable_points<'a>(airspace: &'a AirSpace, start: &NavPoint) -> Vec<&'a NavPoint> {
    let mut reached: HashSet<PointNumber> = HashSet::new();
    let mut frontier = VecDeque::new();
    frontier.push_back(start.number);

    while let Some(current) = frontier.pop_front() {
        if !reached.insert(current) {
            continue;
        }
        for segment in airspace.nav_segments() {
            if segment.origin_number != current {
                continue;
            }
            let Some(next) = airspace.point_by_number(segment.destination_number) else {
                continue;
            };
            if !reached.contains(&next.number) {
                frontier.push_back(next.number);
            }
        }
    }

    airspace
        .nav_points()
        .iter()
        .filter(|point| reached.contains(&point.number))
        .collect()
}

/// Lowest-cost path discovered by [`shortest_path`].
#[derive(Debug, Clone)]
pub struct PathFound<'a> {
    /// Points along the path, origin first, destination last.
    pub points: Vec<&'a NavPoint>,
    /// Sum of the traversed segment distances.
    pub cost: f64,
}

/// Find the lowest-cost path from `origin` to `destination` along
/// directed segments.
///
/// Best-first search ordered by accumulated segment distance plus the
/// planar straight-line distance from the frontier head to the
/// destination. Each frontier entry carries its full path; a point is
/// marked visited only when popped, so several partial paths to the same
/// point may be in flight until the cheapest one wins. Ties in score
/// break by insertion order.
///
/// The estimate assumes segment distances approximate the straight-line
/// distance between their endpoints. Datasets with longer published
/// distances still get a valid path, but not necessarily the cheapest
/// one.
///
/// Returns `None` when the frontier empties without reaching the
/// destination. When `origin` and `destination` are the same point the
/// path holds that single point at cost zero.
pub fn shortest_path<'a>(
    airspace: &'a AirSpace,
    origin: &'a NavPoint,
    destination: &'a NavPoint,
) -> Option<PathFound<'a>> {
    let goal = destination.position;
    let mut visited: HashSet<PointNumber> = HashSet::new();
    let mut frontier = BinaryHeap::new();
    let mut sequence = 0u64;

    frontier.push(FrontierEntry::new(
        origin,
        vec![origin],
        0.0,
        origin.position.distance_to(&goal),
        sequence,
    ));

    while let Some(entry) = frontier.pop() {
        if entry.head.number == destination.number {
            return Some(PathFound {
                points: entry.path,
                cost: entry.cost,
            });
        }
        if !visited.insert(entry.head.number) {
            continue;
        }

        for segment in airspace.nav_segments() {
            if segment.origin_number != entry.head.number {
                continue;
            }
            let Some(next) = airspace.point_by_number(segment.destination_number) else {
                continue;
            };
            if visited.contains(&next.number) {
                continue;
            }

            let mut path = entry.path.clone();
            path.push(next);
            sequence += 1;
            frontier.push(FrontierEntry::new(
                next,
                path,
                entry.cost + segment.distance,
                next.position.distance_to(&goal),
                sequence,
            ));
        }
    }

    None
}

fn compare_distance(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Greater)
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

struct FrontierEntry<'a> {
    head: &'a NavPoint,
    path: Vec<&'a NavPoint>,
    cost: f64,
    score: FloatOrd,
    sequence: u64,
}

impl<'a> FrontierEntry<'a> {
    fn new(
        head: &'a NavPoint,
        path: Vec<&'a NavPoint>,
        cost: f64,
        estimate: f64,
        sequence: u64,
    ) -> Self {
        Self {
            head,
            path,
            cost,
            score: FloatOrd(cost + estimate),
            sequence,
        }
    }
}

impl PartialEq for FrontierEntry<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.score == other.score && self.sequence == other.sequence
    }
}

impl Eq for FrontierEntry<'_> {}

impl Ord for FrontierEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by score;
        // earlier insertions win ties.
        other
            .score
            .cmp(&self.score)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for FrontierEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
