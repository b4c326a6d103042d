mod common;

use skyroute_lib::{
    plan_route, ColumnLayout, Error, FlightNetwork, RouteAlgorithm, RouteRequest, SnapshotSource,
};

use common::{fixture_network, fixture_path, steps};

#[test]
fn cheapest_route_plan_succeeds() {
    let network = fixture_network();
    let plan = plan_route(&network, &RouteRequest::cheapest("SIN", "NRT")).expect("route exists");

    assert_eq!(plan.algorithm, RouteAlgorithm::Cheapest);
    assert_eq!(plan.start, "SIN");
    assert_eq!(plan.goal, "NRT");
    assert_eq!(plan.paths.len(), 1);

    let best = plan.best().expect("one path");
    assert_eq!(best.steps, steps(&["SIN", "KUL", "BKK", "HKG", "NRT"]));
    assert_eq!(best.cost, 470.0);
    assert_eq!(best.distance, 6100.0);
}

#[test]
fn shortest_hops_are_sorted_by_distance() {
    let network = fixture_network();
    let request = RouteRequest::shortest_hops("SIN", "NRT", 3);
    let plan = plan_route(&network, &request).expect("routes exist");

    assert_eq!(plan.algorithm, RouteAlgorithm::ShortestHops);
    let ordered: Vec<_> = plan.paths.iter().map(|p| p.steps.clone()).collect();
    assert_eq!(
        ordered,
        vec![
            steps(&["SIN", "HKG", "NRT"]),
            steps(&["SIN", "BKK", "NRT"]),
            steps(&["SIN", "KUL", "BKK", "NRT"]),
        ]
    );

    let distances: Vec<f64> = plan.paths.iter().map(|p| p.distance).collect();
    assert_eq!(distances, vec![5480.0, 6030.0, 6080.0]);
    let costs: Vec<f64> = plan.paths.iter().map(|p| p.cost).collect();
    assert_eq!(costs, vec![550.0, 570.0, 550.0]);
}

#[test]
fn airport_names_are_accepted() {
    let network = fixture_network();
    let request = RouteRequest::cheapest("Singapore Changi Airport", "tokyo haneda airport");
    let plan = plan_route(&network, &request).expect("route exists");

    assert_eq!(plan.start, "SIN");
    assert_eq!(plan.goal, "HND");
    assert_eq!(
        plan.best().map(|p| p.steps.clone()),
        Some(steps(&["SIN", "KUL", "BKK", "HKG", "HND"]))
    );
}

#[test]
fn unknown_airport_includes_suggestions() {
    let network = fixture_network();
    let err = plan_route(&network, &RouteRequest::cheapest("SINN", "NRT")).expect_err("unknown");

    let message = err.to_string();
    assert!(message.contains("unknown airport"), "{message}");
    assert!(message.contains("Did you mean"), "{message}");
    assert!(message.contains("SIN"), "{message}");
}

#[test]
fn identical_endpoints_are_rejected() {
    let network = fixture_network();
    let err = plan_route(
        &network,
        &RouteRequest::cheapest("SIN", "Singapore Changi Airport"),
    )
    .expect_err("same airport");
    assert!(matches!(err, Error::SameEndpoints { .. }));
}

#[test]
fn arrival_only_airport_is_not_served() {
    let network = fixture_network();
    let err = plan_route(&network, &RouteRequest::cheapest("SIN", "LHR")).expect_err("no routes");

    match err {
        Error::AirportNotServed { code } => assert_eq!(code, "LHR"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn unreachable_destination_is_route_not_found() {
    let network = fixture_network();

    for request in [
        RouteRequest::cheapest("NRT", "SIN"),
        RouteRequest::shortest_hops("NRT", "SIN", 3),
    ] {
        let err = plan_route(&network, &request).expect_err("no route");
        assert!(
            matches!(err, Error::RouteNotFound { .. }),
            "unexpected error: {err}"
        );
    }
}

#[test]
fn zero_alternatives_is_route_not_found() {
    let network = fixture_network();
    let err = plan_route(&network, &RouteRequest::shortest_hops("SIN", "NRT", 0))
        .expect_err("nothing requested");
    assert!(matches!(err, Error::RouteNotFound { .. }));
}

#[test]
fn snapshot_network_plans_like_file_network() {
    let snapshot = SnapshotSource::load(fixture_path()).expect("snapshot loads");
    let network = FlightNetwork::new(snapshot, ColumnLayout::default());

    let plan = plan_route(&network, &RouteRequest::cheapest("SIN", "NRT")).expect("route exists");
    assert_eq!(plan.best().map(|p| p.cost), Some(470.0));
}

#[test]
fn missing_dataset_surfaces_source_unavailable() {
    let dir = tempfile::tempdir().expect("temp dir");
    let network = FlightNetwork::open(Some(dir.path()), ColumnLayout::default()).expect("resolves");

    let err = plan_route(&network, &RouteRequest::cheapest("SIN", "NRT")).expect_err("no data");
    assert!(matches!(err, Error::SourceUnavailable { .. }));
}
