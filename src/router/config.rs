use serde::{Deserialize, Serialize};

use crate::router::Error;

/// Constants the routing graph is weighted with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoutingSettings {
    /// Minutes spent waiting for a bus every time one is boarded.
    pub bus_wait_time: f64,
    /// Average bus speed in km/h.
    pub bus_velocity: f64,
}

impl Default for RoutingSettings {
    fn default() -> Self {
        Self {
            bus_wait_time: 6.0,
            bus_velocity: 40.0,
        }
    }
}

impl RoutingSettings {
    pub fn new(bus_wait_time: f64, bus_velocity: f64) -> Self {
        Self {
            bus_wait_time,
            bus_velocity,
        }
    }

    pub fn with_bus_wait_time(mut self, minutes: f64) -> Self {
        self.bus_wait_time = minutes;
        self
    }

    pub fn with_bus_velocity(mut self, km_per_hour: f64) -> Self {
        self.bus_velocity = km_per_hour;
        self
    }

    /// Edge weights stay non-negative only with a non-negative wait and a positive speed.
    pub fn validate(&self) -> Result<(), Error> {
        if !self.bus_wait_time.is_finite() || self.bus_wait_time < 0.0 {
            return Err(Error::InvalidSettings(format!(
                "bus_wait_time must be a non-negative number of minutes, got {}",
                self.bus_wait_time
            )));
        }
        if !self.bus_velocity.is_finite() || self.bus_velocity <= 0.0 {
            return Err(Error::InvalidSettings(format!(
                "bus_velocity must be a positive speed in km/h, got {}",
                self.bus_velocity
            )));
        }
        Ok(())
    }
}
