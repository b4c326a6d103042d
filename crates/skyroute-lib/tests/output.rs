mod common;

use skyroute_lib::{plan_route, Error, RoutePlan, RouteRenderMode, RouteRequest, RouteSummary};

use common::fixture_network;

fn summary_for(request: RouteRequest) -> RouteSummary {
    let network = fixture_network();
    let directory = network.directory().expect("directory");
    let plan = plan_route(&network, &request).expect("route exists");
    RouteSummary::from_plan(&network, &directory, &plan).expect("summary")
}

#[test]
fn summary_resolves_names_and_airlines() {
    let summary = summary_for(RouteRequest::cheapest("SIN", "NRT"));

    assert_eq!(summary.start.name.as_deref(), Some("Singapore Changi Airport"));
    assert_eq!(
        summary.goal.name.as_deref(),
        Some("Narita International Airport")
    );

    let path = &summary.paths[0];
    assert_eq!(path.rank, 1);
    assert_eq!(path.hops, 4);
    assert_eq!(path.steps.len(), 5);
    assert_eq!(path.legs.len(), 4);
    assert_eq!(path.legs[0].airlines, vec!["Malaysia Airlines", "AirAsia"]);
    assert_eq!(path.legs[3].airlines, vec!["Cathay Pacific"]);
}

#[test]
fn plain_text_lists_legs_and_totals() {
    let rendered = summary_for(RouteRequest::cheapest("SIN", "NRT")).render(RouteRenderMode::PlainText);

    assert!(rendered.starts_with(
        "Cheapest route: Singapore Changi Airport -> Narita International Airport (algorithm: cheapest)"
    ));
    assert!(rendered.contains("Path 1 (4 flights):"));
    assert!(rendered.contains("Singapore Changi Airport (SIN) -> Kuala Lumpur International Airport (KUL)"));
    assert!(rendered.contains("  SIN -> KUL: Malaysia Airlines, AirAsia"));
    assert!(rendered.contains("  Cost: $470.00"));
    assert!(rendered.contains("  Distance: 6100.00 km"));
}

#[test]
fn plain_text_numbers_every_alternative() {
    let rendered = summary_for(RouteRequest::shortest_hops("SIN", "NRT", 3))
        .render(RouteRenderMode::PlainText);

    assert!(rendered.starts_with("Shortest routes (ascending distance)"));
    let first = rendered.find("Path 1 (2 flights)").expect("first path");
    let third = rendered.find("Path 3 (3 flights)").expect("third path");
    assert!(first < third);
    assert!(rendered.contains("  Distance: 5480.00 km"));
}

#[test]
fn rich_text_uses_markdown() {
    let rendered = summary_for(RouteRequest::cheapest("SIN", "NRT")).render(RouteRenderMode::RichText);

    assert!(rendered.starts_with("**Cheapest route**"));
    assert!(rendered.contains("### Path 1"));
    assert!(rendered.contains("(`NRT`)"));
}

#[test]
fn summary_serialises_to_json() {
    let summary = summary_for(RouteRequest::shortest_hops("SIN", "NRT", 2));
    let value = serde_json::to_value(&summary).expect("serialises");

    assert_eq!(value["algorithm"], "shortest-hops");
    assert_eq!(value["start"]["code"], "SIN");
    assert_eq!(value["paths"].as_array().map(Vec::len), Some(2));
    assert_eq!(value["paths"][0]["legs"][0]["from"], "SIN");
}

#[test]
fn empty_plan_is_rejected() {
    let network = fixture_network();
    let directory = network.directory().expect("directory");
    let plan = RoutePlan {
        algorithm: Default::default(),
        start: "SIN".to_string(),
        goal: "NRT".to_string(),
        paths: Vec::new(),
    };

    let err = RouteSummary::from_plan(&network, &directory, &plan).expect_err("empty");
    assert!(matches!(err, Error::EmptyRoutePlan));
}
