mod projector;
pub mod svg;

pub use projector::*;

use serde::{Deserialize, Serialize};

use crate::{
    catalogue::{Catalogue, Route, Stop},
    render::svg::{Color, Document, Element, Paint, Point, Text},
    shared::geo::Coordinate,
};

const FONT_FAMILY: &str = "Verdana";

/// Canvas size and styling of the network map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderSettings {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    pub line_width: f64,
    pub stop_radius: f64,
    pub bus_label_font_size: u32,
    pub bus_label_offset: (f64, f64),
    pub stop_label_font_size: u32,
    pub stop_label_offset: (f64, f64),
    pub underlayer_color: Color,
    pub underlayer_width: f64,
    /// Route colors, handed out in route name order and reused cyclically.
    pub color_palette: Vec<Color>,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 1200.0,
            padding: 50.0,
            line_width: 14.0,
            stop_radius: 5.0,
            bus_label_font_size: 20,
            bus_label_offset: (7.0, 15.0),
            stop_label_font_size: 20,
            stop_label_offset: (7.0, -3.0),
            underlayer_color: Color::Rgba(255, 255, 255, 0.85),
            underlayer_width: 3.0,
            color_palette: vec!["green".into(), Color::Rgb(255, 160, 0), "red".into()],
        }
    }
}

/// Draws routes and stops of a catalogue.
///
/// Layers are drawn bottom to top: route lines, route labels, stop symbols and
/// stop labels. Only routes with stops and stops served by a route are drawn.
pub struct MapRenderer<'a> {
    settings: &'a RenderSettings,
    catalogue: &'a Catalogue,
}

impl<'a> MapRenderer<'a> {
    pub fn new(settings: &'a RenderSettings, catalogue: &'a Catalogue) -> Self {
        Self {
            settings,
            catalogue,
        }
    }

    pub fn render(&self) -> Document {
        let routes: Vec<&Route> = self
            .catalogue
            .sorted_routes()
            .iter()
            .filter(|route| !route.stops.is_empty())
            .collect();
        let stops = self.catalogue.stops_served();

        let coordinates: Vec<Coordinate> = routes
            .iter()
            .flat_map(|route| route.stops.iter())
            .map(|stop_idx| self.stop(*stop_idx).coordinate)
            .collect();
        let projector = SphereProjector::new(
            &coordinates,
            self.settings.width,
            self.settings.height,
            self.settings.padding,
        );

        let mut document = Document::new();
        routes.iter().enumerate().for_each(|(i, route)| {
            document.add(self.route_line(route, self.color(i), &projector));
        });
        routes.iter().enumerate().for_each(|(i, route)| {
            self.route_labels(route, self.color(i), &projector)
                .into_iter()
                .for_each(|label| document.add(label));
        });
        stops.iter().for_each(|stop| {
            document.add(Element::Circle {
                center: projector.project(stop.coordinate),
                radius: self.settings.stop_radius,
                paint: Paint::default().fill("white".into()),
            });
        });
        stops.iter().for_each(|stop| {
            let position = projector.project(stop.coordinate);
            let text = Text {
                position,
                offset: self.settings.stop_label_offset.into(),
                font_size: self.settings.stop_label_font_size,
                font_family: Some(FONT_FAMILY.into()),
                font_weight: None,
                data: stop.name.to_string(),
            };
            document.add(self.underlayer(text.clone()));
            document.add(Element::Text {
                text,
                paint: Paint::default().fill("black".into()),
            });
        });
        document
    }

    fn stop(&self, stop_idx: u32) -> &Stop {
        &self.catalogue.stops[stop_idx as usize]
    }

    fn color(&self, route_position: usize) -> Color {
        let palette = &self.settings.color_palette;
        if palette.is_empty() {
            return Color::default();
        }
        palette[route_position % palette.len()].clone()
    }

    fn route_line(&self, route: &Route, color: Color, projector: &SphereProjector) -> Element {
        let points: Vec<Point> = route
            .traversal()
            .map(|stop_idx| projector.project(self.stop(stop_idx).coordinate))
            .collect();
        Element::Polyline {
            points,
            paint: Paint::default()
                .fill(Color::default())
                .stroke(color, self.settings.line_width)
                .rounded(),
        }
    }

    /// A label at the first stop, and at the last one for linear routes with distinct ends.
    fn route_labels(&self, route: &Route, color: Color, projector: &SphereProjector) -> Vec<Element> {
        let mut ends = vec![route.stops[0]];
        if let Some(last) = route.stops.last()
            && !route.is_circular
            && *last != route.stops[0]
        {
            ends.push(*last);
        }

        ends.into_iter()
            .flat_map(|stop_idx| {
                let text = Text {
                    position: projector.project(self.stop(stop_idx).coordinate),
                    offset: self.settings.bus_label_offset.into(),
                    font_size: self.settings.bus_label_font_size,
                    font_family: Some(FONT_FAMILY.into()),
                    font_weight: Some("bold".into()),
                    data: route.name.to_string(),
                };
                [
                    self.underlayer(text.clone()),
                    Element::Text {
                        text,
                        paint: Paint::default().fill(color.clone()),
                    },
                ]
            })
            .collect()
    }

    fn underlayer(&self, text: Text) -> Element {
        Element::Text {
            text,
            paint: Paint::default()
                .fill(self.settings.underlayer_color.clone())
                .stroke(
                    self.settings.underlayer_color.clone(),
                    self.settings.underlayer_width,
                )
                .rounded(),
        }
    }
}
