use serde::Serialize;
use std::fmt::{Display, Formatter};

/// A point on the earth's surface, in decimal degrees.
#[derive(Clone, Copy, Default, Debug, PartialEq, Serialize)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
}

impl Position {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Position { latitude, longitude }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[latitude={}, longitude={}]", self.latitude, self.longitude)
    }
}
