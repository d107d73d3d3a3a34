use airspace_lib::{
    nearest_point, plan_route, reachable_points, AirSpace, Coordinate, Error, NavPoint, NavSegment,
    RouteRequest,
};

fn fixture_airspace() -> AirSpace {
    let mut airspace = AirSpace::default();
    airspace.load(
        vec![
            NavPoint::new(1, "ALBEX", 0.0, 0.0),
            NavPoint::new(2, "BERTA", 0.0, 1.0),
            NavPoint::new(3, "CASPE", 1.0, 1.0),
        ],
        vec![
            NavSegment {
                origin_number: 1,
                destination_number: 2,
                distance: 1.0,
            },
            NavSegment {
                origin_number: 2,
                destination_number: 3,
                distance: 1.0,
            },
            NavSegment {
                origin_number: 1,
                destination_number: 3,
                distance: 5.0,
            },
        ],
        Vec::new(),
    );
    airspace
}

#[test]
fn plan_route_prefers_the_cheaper_detour() {
    let airspace = fixture_airspace();

    let request = RouteRequest::new("ALBEX", "CASPE");
    let plan = plan_route(&airspace, &request).expect("route exists");

    assert_eq!(plan.origin, 1);
    assert_eq!(plan.destination, 3);
    assert_eq!(plan.steps, vec![1, 2, 3]);
    assert_eq!(plan.hop_count(), 2);
    assert!((plan.cost - 2.0).abs() < 1e-9);
}

#[test]
fn plan_route_to_the_same_point_costs_nothing() {
    let airspace = fixture_airspace();

    let request = RouteRequest::new("BERTA", "BERTA");
    let plan = plan_route(&airspace, &request).expect("trivial route exists");

    assert_eq!(plan.steps, vec![2]);
    assert_eq!(plan.hop_count(), 0);
    assert_eq!(plan.cost, 0.0);
}

#[test]
fn unknown_origin_includes_suggestions() {
    let airspace = fixture_airspace();

    let request = RouteRequest::new("ALBEC", "CASPE");
    let error = plan_route(&airspace, &request).expect_err("origin is misspelled");

    let message = format!("{error}");
    assert!(message.contains("unknown point name: ALBEC"));
    assert!(message.contains("Did you mean"));
    assert!(message.contains("ALBEX"));
}

#[test]
fn unreachable_destination_reports_no_route() {
    let airspace = fixture_airspace();

    // CASPE has no outgoing segments.
    let request = RouteRequest::new("CASPE", "ALBEX");
    let error = plan_route(&airspace, &request).expect_err("no route backwards");

    assert!(format!("{error}").contains("no route found between CASPE and ALBEX"));
}

#[test]
fn reachable_points_resolves_the_start_by_name() {
    let airspace = fixture_airspace();

    let from_albex = reachable_points(&airspace, "ALBEX").expect("start exists");
    let reached: Vec<&str> = from_albex.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(reached, vec!["ALBEX", "BERTA", "CASPE"]);

    let from_caspe = reachable_points(&airspace, "CASPE").expect("start exists");
    assert_eq!(from_caspe.len(), 1);
    assert_eq!(from_caspe[0].name, "CASPE");
}

#[test]
fn reachable_points_rejects_unknown_names() {
    let airspace = fixture_airspace();

    let error = reachable_points(&airspace, "NOWHERE").expect_err("name is unknown");
    assert!(matches!(error, Error::UnknownPoint { .. }));
}

#[test]
fn nearest_point_requires_a_loaded_dataset() {
    let airspace = AirSpace::default();

    let anywhere = Coordinate {
        latitude: 0.0,
        longitude: 0.0,
    };
    let error = nearest_point(&airspace, anywhere).expect_err("nothing loaded");
    assert!(matches!(error, Error::EmptyAirspace));
    assert!(format!("{error}").contains("no navigation points"));
}

#[test]
fn nearest_point_returns_the_closest_point() {
    let airspace = fixture_airspace();

    let near_caspe = Coordinate {
        latitude: 1.2,
        longitude: 0.9,
    };
    let found = nearest_point(&airspace, near_caspe).expect("points loaded");
    assert_eq!(found.number, 3);
}

#[test]
fn route_plan_serializes_for_consumers() {
    let airspace = fixture_airspace();

    let request = RouteRequest::new("ALBEX", "CASPE");
    let plan = plan_route(&airspace, &request).expect("route exists");

    let value = serde_json::to_value(&plan).expect("plan serializes");
    assert_eq!(value["origin"], serde_json::json!(1));
    assert_eq!(value["destination"], serde_json::json!(3));
    assert_eq!(value["steps"], serde_json::json!([1, 2, 3]));
    assert!((value["cost"].as_f64().unwrap() - 2.0).abs() < 1e-9);
}
