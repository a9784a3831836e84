//! HTML page handlers.

mod index;
mod weather;

pub use index::{IndexTemplate, WeatherView, index_handler};
pub use weather::{WeatherQuery, weather_handler};
