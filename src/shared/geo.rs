use std::{
    cmp,
    fmt::Display,
    iter::Sum,
    ops::{Add, AddAssign, Div},
};

use serde::{Deserialize, Serialize};

pub(crate) const EARTH_RADIUS: Distance = Distance::from_meters(6_371_000.0);

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Distance(f64);

impl PartialEq for Distance {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl PartialOrd for Distance {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

impl Add for Distance {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Distance {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0
    }
}

impl Div for Distance {
    type Output = f64;
    fn div(self, rhs: Self) -> Self::Output {
        self.0 / rhs.0
    }
}

impl Sum for Distance {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |acc, distance| acc + distance)
    }
}

impl Display for Distance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}m", self.0)
    }
}

impl Distance {
    pub const fn from_meters(distance: f64) -> Self {
        Self(distance)
    }

    pub const fn as_meters(&self) -> f64 {
        self.0
    }

    pub fn is_valid(&self) -> bool {
        self.0.is_finite() && self.0 >= 0.0
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{}, {}", self.latitude, self.longitude))
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl From<Coordinate> for (f64, f64) {
    fn from(value: Coordinate) -> Self {
        (value.latitude, value.longitude)
    }
}

impl Coordinate {
    /// Distance along the earth surface using the spherical law of cosines.
    /// Identical points are exactly zero apart.
    pub fn great_circle_distance(&self, coord: &Self) -> Distance {
        if self == coord {
            return Distance::default();
        }
        let from_lat = self.latitude.to_radians();
        let to_lat = coord.latitude.to_radians();
        let delta_lon = (self.longitude - coord.longitude).abs().to_radians();
        // Rounding can push the cosine just outside of acos' domain for very close points
        let cosine = (from_lat.sin() * to_lat.sin()
            + from_lat.cos() * to_lat.cos() * delta_lon.cos())
        .clamp(-1.0, 1.0);
        Distance::from_meters(cosine.acos() * EARTH_RADIUS.as_meters())
    }

    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }
}

#[test]
fn distance_test() {
    let paris = Coordinate::from((48.85800943005911, 2.3514350059357927));
    let london = Coordinate::from((51.5052389927712, -0.12495407345099824));
    let d = paris.great_circle_distance(&london);
    assert!((d.as_meters() - 343_000.0).abs() < 5_000.0);
}

#[test]
fn distance_same_point_test() {
    let coord = Coordinate::from((55.611087, 37.20829));
    assert_eq!(coord.great_circle_distance(&coord), Distance::default());
}

#[test]
fn distance_symmetric_test() {
    let a = Coordinate::from((55.611087, 37.20829));
    let b = Coordinate::from((55.595884, 37.209755));
    assert_eq!(a.great_circle_distance(&b), b.great_circle_distance(&a));
}

#[test]
fn distance_sum_test() {
    let total: Distance = [250.0, 750.0]
        .into_iter()
        .map(Distance::from_meters)
        .sum();
    assert_eq!(total, Distance::from_meters(1000.0))
}

#[test]
fn distance_cmp_test() {
    let dist_a = Distance::from_meters(1000.0);
    let dist_b = Distance::from_meters(500.0);
    assert!(dist_a > dist_b)
}
