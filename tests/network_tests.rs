use busline::network::Error;
use busline::prelude::*;
use busline::router;

fn network() -> Network {
    Network::build(
        vec![
            ("Tolstopaltsevo", Coordinate::from((55.611087, 37.20829))),
            ("Marushkino", Coordinate::from((55.595884, 37.209755))),
            ("Rasskazovka", Coordinate::from((55.632761, 37.333324))),
        ],
        vec![(
            "750",
            vec!["Tolstopaltsevo", "Marushkino", "Rasskazovka"],
            false,
        )],
        vec![
            ("Tolstopaltsevo", "Marushkino", Distance::from_meters(3900.0)),
            ("Marushkino", "Rasskazovka", Distance::from_meters(9900.0)),
        ],
    )
    .unwrap()
}

#[test]
fn queries_before_routing_test() {
    let network = network();
    assert_eq!(network.route_info("750").unwrap().stop_count, 5);
    assert!(network.stop_info("Marushkino").is_some());
    assert_eq!(
        network.find_route("Tolstopaltsevo", "Rasskazovka"),
        Err(Error::GraphNotBuilt)
    );
}

#[test]
fn build_graph_requires_settings_test() {
    let mut network = network();
    assert!(matches!(
        network.build_graph(),
        Err(Error::RoutingNotConfigured)
    ));
}

#[test]
fn invalid_settings_test() {
    let mut network = network();
    assert!(matches!(
        network.configure_routing(RoutingSettings::new(6.0, -40.0)),
        Err(Error::Router(router::Error::InvalidSettings(_)))
    ));
}

#[test]
fn full_setup_test() {
    let mut network = network();
    network.configure_routing(RoutingSettings::default()).unwrap();
    network.build_graph().unwrap();

    let itinerary = network
        .find_route("Tolstopaltsevo", "Rasskazovka")
        .unwrap()
        .unwrap();
    assert_eq!(itinerary.bus_legs().count(), 1);
    assert!(matches!(
        network.find_route("Tolstopaltsevo", "Nowhere"),
        Err(Error::Router(router::Error::UnknownStop(_)))
    ));
}

#[test]
fn reconfigure_drops_graph_test() {
    let mut network = network();
    network.configure_routing(RoutingSettings::default()).unwrap();
    network.build_graph().unwrap();
    network
        .configure_routing(RoutingSettings::default().with_bus_velocity(30.0))
        .unwrap();
    assert!(matches!(network.router(), Err(Error::GraphNotBuilt)));

    network.build_graph().unwrap();
    assert_eq!(network.router().unwrap().settings().bus_velocity, 30.0);
}

#[test]
fn unknown_route_stop_test() {
    let result = Network::build(
        vec![("A", Coordinate::from((55.0, 37.0)))],
        vec![("1", vec!["A", "B"], true)],
        Vec::<(&str, &str, Distance)>::new(),
    );
    assert!(matches!(result, Err(Error::Catalogue(_))));
}
