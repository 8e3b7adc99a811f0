//! Data models for the `TravelAssist` tools
//!
//! - Location: geocoded places and the weather tool input
//! - Weather: current conditions and the weather tool output
//! - Station: provider station records and the station tool input/output

pub mod location;
pub mod station;
pub mod weather;

pub use location::{Location, LocationQuery};
pub use station::{StationQuery, StationRecord, StationResult};
pub use weather::{CurrentConditions, WeatherObservation};
