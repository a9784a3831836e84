//! Weather record entity and its cache wire format.

use serde::{Deserialize, Serialize};

/// Current weather conditions for a single city.
///
/// Produced either by decoding a cache entry or by parsing a provider
/// response. Serializes to the cache wire format:
///
/// ```json
/// {"CityName":"London","CityTemp":15.2,"FeelsLike":14.0,"Pressure":1012,"Humidity":70,"WSpeed":3.5}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherRecord {
    #[serde(rename = "CityName")]
    pub city_name: String,
    /// Temperature in degrees Celsius.
    #[serde(rename = "CityTemp")]
    pub temperature: f64,
    #[serde(rename = "FeelsLike")]
    pub feels_like: f64,
    /// Atmospheric pressure in hPa.
    #[serde(rename = "Pressure")]
    pub pressure: i32,
    /// Relative humidity, percent.
    #[serde(rename = "Humidity")]
    pub humidity: i32,
    /// Wind speed in metres per second.
    #[serde(rename = "WSpeed")]
    pub wind_speed: f64,
}

impl WeatherRecord {
    /// Creates a new WeatherRecord instance.
    pub fn new(
        city_name: String,
        temperature: f64,
        feels_like: f64,
        pressure: i32,
        humidity: i32,
        wind_speed: f64,
    ) -> Self {
        Self {
            city_name,
            temperature,
            feels_like,
            pressure,
            humidity,
            wind_speed,
        }
    }

    /// Serializes the record into the value stored in the cache.
    pub fn to_cache_value(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Decodes a record from a cached value.
    pub fn from_cache_value(value: &str) -> serde_json::Result<Self> {
        serde_json::from_str(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn london() -> WeatherRecord {
        WeatherRecord::new("London".to_string(), 15.2, 14.0, 1012, 70, 3.5)
    }

    #[test]
    fn test_cache_value_round_trip() {
        let record = london();
        let value = record.to_cache_value().unwrap();
        let decoded = WeatherRecord::from_cache_value(&value).unwrap();

        assert_eq!(decoded, record);
    }

    #[test]
    fn test_cache_value_field_names() {
        let value = london().to_cache_value().unwrap();
        let json: serde_json::Value = serde_json::from_str(&value).unwrap();

        assert_eq!(json["CityName"], "London");
        assert_eq!(json["CityTemp"], 15.2);
        assert_eq!(json["FeelsLike"], 14.0);
        assert_eq!(json["Pressure"], 1012);
        assert_eq!(json["Humidity"], 70);
        assert_eq!(json["WSpeed"], 3.5);
    }

    #[test]
    fn test_from_cache_value_rejects_garbage() {
        assert!(WeatherRecord::from_cache_value("not json").is_err());
        assert!(WeatherRecord::from_cache_value(r#"{"CityName":"Oslo"}"#).is_err());
    }
}
