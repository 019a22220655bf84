use crate::{render::svg::Point, shared::geo::Coordinate};

const EPSILON: f64 = 1e-6;

fn is_zero(value: f64) -> bool {
    value.abs() < EPSILON
}

/// Projects coordinates onto a flat canvas so that every given point fits
/// inside the padded area, keeping the aspect ratio.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SphereProjector {
    padding: f64,
    min_lon: f64,
    max_lat: f64,
    zoom: f64,
}

impl SphereProjector {
    pub fn new(points: &[Coordinate], width: f64, height: f64, padding: f64) -> Self {
        let mut projector = Self {
            padding,
            ..Default::default()
        };
        if points.is_empty() {
            return projector;
        }

        let (min_lon, max_lon) = min_max(points.iter().map(|point| point.longitude));
        let (min_lat, max_lat) = min_max(points.iter().map(|point| point.latitude));
        projector.min_lon = min_lon;
        projector.max_lat = max_lat;

        let width_zoom =
            (!is_zero(max_lon - min_lon)).then(|| (width - 2.0 * padding) / (max_lon - min_lon));
        let height_zoom =
            (!is_zero(max_lat - min_lat)).then(|| (height - 2.0 * padding) / (max_lat - min_lat));

        projector.zoom = match (width_zoom, height_zoom) {
            (Some(w), Some(h)) => w.min(h),
            (Some(zoom), None) | (None, Some(zoom)) => zoom,
            (None, None) => 0.0,
        };
        projector
    }

    pub fn project(&self, coordinate: Coordinate) -> Point {
        Point {
            x: (coordinate.longitude - self.min_lon) * self.zoom + self.padding,
            y: (self.max_lat - coordinate.latitude) * self.zoom + self.padding,
        }
    }
}

fn min_max(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), value| {
        (min.min(value), max.max(value))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fits_points_inside_padding() {
        let points = [
            Coordinate::from((43.587795, 39.716901)),
            Coordinate::from((43.581969, 39.719848)),
            Coordinate::from((43.598701, 39.730623)),
        ];
        let projector = SphereProjector::new(&points, 200.0, 100.0, 10.0);
        for point in points {
            let projected = projector.project(point);
            assert!(projected.x >= 10.0 - EPSILON && projected.x <= 190.0 + EPSILON);
            assert!(projected.y >= 10.0 - EPSILON && projected.y <= 90.0 + EPSILON);
        }
    }

    #[test]
    fn single_point_lands_on_padding() {
        let point = Coordinate::from((55.0, 37.0));
        let projector = SphereProjector::new(&[point], 200.0, 100.0, 30.0);
        assert_eq!(projector.project(point), Point { x: 30.0, y: 30.0 });
    }
}
