use std::{
    io,
    sync::{Arc, Mutex},
};

use busline::document::{Document, Query, StatRequest};
use busline::prelude::*;
use tracing::Level;

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Captured {
    fn take(&self) -> String {
        String::from_utf8(std::mem::take(&mut *self.0.lock().unwrap())).unwrap()
    }
}

fn route_request(from: &str, to: &str) -> StatRequest {
    StatRequest {
        id: 7,
        query: Query::Route {
            from: from.into(),
            to: to.into(),
        },
    }
}

#[test]
fn route_without_graph_warns_test() {
    let document = Document::from_json(
        r#"{"base_requests": [
            {"type": "Stop", "name": "A", "latitude": 55.0, "longitude": 37.0},
            {"type": "Stop", "name": "B", "latitude": 55.1, "longitude": 37.1},
            {"type": "Bus", "name": "1", "stops": ["A", "B"], "is_roundtrip": false}
        ]}"#,
    )
    .unwrap();
    let unrouted = document.build_network().unwrap();
    let mut routed = unrouted.clone();
    routed.configure_routing(RoutingSettings::default()).unwrap();
    routed.build_graph().unwrap();

    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(Level::WARN)
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let response = document.handler(&routed).handle(&route_request("A", "Nowhere"));
        assert!(response.body.is_not_found());
        assert_eq!(captured.take(), "");

        let response = document.handler(&unrouted).handle(&route_request("A", "B"));
        assert!(response.body.is_not_found());
        let logs = captured.take();
        assert!(logs.contains("WARN"));
        assert!(logs.contains("The routing graph has not been built"));
    });
}
