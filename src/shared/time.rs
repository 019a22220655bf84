use std::{
    cmp,
    fmt::Display,
    iter::Sum,
    ops::{Add, AddAssign},
};

use serde::{Deserialize, Serialize};

use crate::shared::geo::Distance;

const METERS_PER_KILOMETER: f64 = 1000.0;
const MINUTES_PER_HOUR: f64 = 60.0;

/// A span of time in minutes.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Duration(f64);

impl PartialEq for Duration {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl PartialOrd for Duration {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

impl Add for Duration {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Duration {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0
    }
}

impl Sum for Duration {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |acc, duration| acc + duration)
    }
}

impl Display for Duration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}min", self.0)
    }
}

impl Duration {
    pub const fn from_minutes(minutes: f64) -> Self {
        Self(minutes)
    }

    pub const fn as_minutes(&self) -> f64 {
        self.0
    }

    /// Time needed to cover `distance` at a constant `km_per_hour`.
    pub fn travel(distance: Distance, km_per_hour: f64) -> Self {
        let meters_per_minute = km_per_hour * METERS_PER_KILOMETER / MINUTES_PER_HOUR;
        Self(distance.as_meters() / meters_per_minute)
    }
}

#[test]
fn travel_test() {
    // 40 km/h is 666.66.. meters per minute
    let duration = Duration::travel(Distance::from_meters(2000.0), 40.0);
    assert!((duration.as_minutes() - 3.0).abs() < 1e-9);
}

#[test]
fn travel_zero_distance_test() {
    let duration = Duration::travel(Distance::default(), 30.0);
    assert_eq!(duration, Duration::default());
}

#[test]
fn sum_test() {
    let total: Duration = [1.5, 2.0, 6.0]
        .into_iter()
        .map(Duration::from_minutes)
        .sum();
    assert_eq!(total, Duration::from_minutes(9.5));
}
