//! Landing page handler and the shared page template.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

use crate::domain::entities::WeatherRecord;

/// Template for the single weather page.
///
/// Renders `templates/index.html`. With `weather: None` it shows only the
/// city search form.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub weather: Option<WeatherView>,
}

/// Values shown on the weather card, named as the template expects them.
pub struct WeatherView {
    pub city_name: String,
    pub temp: f64,
    pub flike: f64,
    pub pressure: i32,
    pub humidity: i32,
    pub wspeed: f64,
}

impl From<WeatherRecord> for WeatherView {
    fn from(r: WeatherRecord) -> Self {
        Self {
            city_name: r.city_name,
            temp: r.temperature,
            flike: r.feels_like,
            pressure: r.pressure,
            humidity: r.humidity,
            wspeed: r.wind_speed,
        }
    }
}

/// Renders the landing page.
///
/// # Endpoint
///
/// `GET /`
pub async fn index_handler() -> impl IntoResponse {
    IndexTemplate { weather: None }
}
