use busline::prelude::*;
use busline::render::{MapRenderer, svg::Element};

fn catalogue() -> Catalogue {
    let mut builder = Catalogue::builder();
    builder
        .add_stop("Rivierskiy most", Coordinate::from((43.587795, 39.716901)))
        .add_stop("Morskoy vokzal", Coordinate::from((43.581969, 39.719848)))
        .add_stop("Elektroseti", Coordinate::from((43.598701, 39.730623)))
        .add_stop("Unused", Coordinate::from((43.0, 39.0)))
        .add_route("114", &["Morskoy vokzal", "Rivierskiy most"], false)
        .add_route("14", &["Elektroseti", "Rivierskiy most", "Elektroseti"], true);
    builder.build().unwrap()
}

#[test]
fn layer_order_test() {
    let catalogue = catalogue();
    let settings = RenderSettings::default();
    let document = MapRenderer::new(&settings, &catalogue).render();
    let elements = document.elements();

    let kind = |element: &Element| -> u8 {
        match element {
            Element::Polyline { .. } => 0,
            Element::Text { .. } => 1,
            Element::Circle { .. } => 2,
        }
    };
    let kinds: Vec<u8> = elements.iter().map(kind).collect();
    // 2 lines, 114 labeled at both ends and 14 once, 3 served stops, 3 stop labels
    assert_eq!(
        kinds,
        [vec![0u8; 2], vec![1; 6], vec![2; 3], vec![1; 6]].concat()
    );
}

#[test]
fn linear_route_goes_back_test() {
    let catalogue = catalogue();
    let settings = RenderSettings::default();
    let document = MapRenderer::new(&settings, &catalogue).render();

    let Element::Polyline { points, .. } = &document.elements()[0] else {
        panic!("first element must be a route line");
    };
    assert_eq!(points.len(), 3);
    assert_eq!(points[0], points[2]);
}

#[test]
fn svg_text_test() {
    let catalogue = catalogue();
    let settings = RenderSettings {
        color_palette: vec!["green".into()],
        ..Default::default()
    };
    let svg = MapRenderer::new(&settings, &catalogue).render().to_string();

    assert!(svg.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\" ?>"));
    assert!(svg.ends_with("</svg>"));
    assert_eq!(svg.matches("<polyline").count(), 2);
    assert_eq!(svg.matches("stroke=\"green\"").count(), 2);
    assert!(!svg.contains(">Unused<"));
    assert!(svg.contains(">Morskoy vokzal</text>"));
}

#[test]
fn empty_catalogue_test() {
    let catalogue = Catalogue::builder().build().unwrap();
    let svg = MapRenderer::new(&RenderSettings::default(), &catalogue)
        .render()
        .to_string();
    assert_eq!(
        svg,
        "<?xml version=\"1.0\" encoding=\"UTF-8\" ?>\n<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\">\n</svg>"
    );
}
