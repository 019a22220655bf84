use busline::document::{self, BaseRequest, Document, Query, ResponseBody};
use serde_json::{Value, json};

const DOCUMENT: &str = r#"{
    "base_requests": [
        {
            "type": "Bus",
            "name": "297",
            "stops": ["Biryulyovo Zapadnoye", "Biryulyovo Tovarnaya", "Universam", "Biryulyovo Zapadnoye"],
            "is_roundtrip": true
        },
        {
            "type": "Bus",
            "name": "635",
            "stops": ["Biryulyovo Tovarnaya", "Universam", "Prazhskaya"],
            "is_roundtrip": false
        },
        {
            "type": "Stop",
            "name": "Biryulyovo Zapadnoye",
            "latitude": 55.574371,
            "longitude": 37.6517,
            "road_distances": {"Biryulyovo Tovarnaya": 2600}
        },
        {
            "type": "Stop",
            "name": "Universam",
            "latitude": 55.587655,
            "longitude": 37.645687,
            "road_distances": {"Biryulyovo Zapadnoye": 5600, "Biryulyovo Tovarnaya": 1380, "Prazhskaya": 4650}
        },
        {
            "type": "Stop",
            "name": "Biryulyovo Tovarnaya",
            "latitude": 55.592028,
            "longitude": 37.653656,
            "road_distances": {"Universam": 890}
        },
        {
            "type": "Stop",
            "name": "Prazhskaya",
            "latitude": 55.611717,
            "longitude": 37.603938
        }
    ],
    "routing_settings": {"bus_wait_time": 2, "bus_velocity": 30},
    "stat_requests": [
        {"id": 1, "type": "Bus", "name": "297"},
        {"id": 2, "type": "Bus", "name": "751"},
        {"id": 3, "type": "Stop", "name": "Universam"},
        {"id": 4, "type": "Stop", "name": "Samara"},
        {"id": 5, "type": "Route", "from": "Biryulyovo Zapadnoye", "to": "Universam"},
        {"id": 6, "type": "Map"}
    ]
}"#;

fn responses() -> Value {
    let mut output = Vec::new();
    document::run(DOCUMENT.as_bytes(), &mut output).unwrap();
    serde_json::from_slice(&output).unwrap()
}

#[test]
fn parse_test() {
    let document = Document::from_json(DOCUMENT).unwrap();
    assert_eq!(document.base_requests.len(), 6);
    assert!(matches!(
        &document.base_requests[1],
        BaseRequest::Bus { is_roundtrip: false, .. }
    ));
    assert_eq!(document.stat_requests[5].query, Query::Map);
    assert_eq!(document.routing_settings.unwrap().bus_velocity, 30.0);
    assert!(document.render_settings.is_none());
}

#[test]
fn bus_response_test() {
    let responses = responses();
    let bus = &responses[0];
    assert_eq!(bus["request_id"], 1);
    assert_eq!(bus["stop_count"], 4);
    assert_eq!(bus["unique_stop_count"], 3);
    assert_eq!(bus["route_length"], 2600.0 + 890.0 + 5600.0);
    assert!(bus["curvature"].as_f64().unwrap() > 1.0);

    assert_eq!(responses[1], json!({"request_id": 2, "error_message": "not found"}));
}

#[test]
fn stop_response_test() {
    let responses = responses();
    assert_eq!(responses[2], json!({"request_id": 3, "buses": ["297", "635"]}));
    assert_eq!(responses[3], json!({"request_id": 4, "error_message": "not found"}));
}

#[test]
fn route_response_test() {
    let responses = responses();
    let route = &responses[4];
    assert_eq!(route["request_id"], 5);
    let items = route["items"].as_array().unwrap();
    assert_eq!(items[0], json!({"type": "Wait", "stop_name": "Biryulyovo Zapadnoye", "time": 2.0}));
    assert_eq!(items[1]["type"], "Bus");
    assert_eq!(items[1]["bus"], "297");
    assert_eq!(items[1]["span_count"], 2);
    // 3490 meters at 500 meters per minute
    let total = route["total_time"].as_f64().unwrap();
    assert!((total - (2.0 + 6.98)).abs() < 1e-9);
}

#[test]
fn map_without_settings_test() {
    let responses = responses();
    assert_eq!(responses[5], json!({"request_id": 6, "error_message": "not found"}));
}

#[test]
fn map_response_test() {
    let mut document = Document::from_json(DOCUMENT).unwrap();
    document.render_settings = Some(Default::default());
    let network = document.build_network().unwrap();
    let responses = document.handler(&network).process(&document.stat_requests);

    assert_eq!(responses.len(), 6);
    let ResponseBody::Map { map } = &responses[5].body else {
        panic!("expected a map");
    };
    assert!(map.contains("<polyline"));
    assert!(responses[1].body.is_not_found());
}

#[test]
fn route_without_settings_test() {
    let mut document = Document::from_json(DOCUMENT).unwrap();
    document.routing_settings = None;
    let network = document.build_network().unwrap();
    let responses = document.handler(&network).process(&document.stat_requests);
    assert!(responses[4].body.is_not_found());
    assert!(!responses[0].body.is_not_found());
}

#[test]
fn invalid_document_test() {
    assert!(matches!(
        Document::from_json("{\"base_requests\": 3}"),
        Err(document::Error::Json(_))
    ));

    let dangling = r#"{"base_requests": [{"type": "Bus", "name": "1", "stops": ["X"], "is_roundtrip": true}]}"#;
    let mut output = Vec::new();
    assert!(matches!(
        document::run(dangling.as_bytes(), &mut output),
        Err(document::Error::Catalogue(_))
    ));
}
