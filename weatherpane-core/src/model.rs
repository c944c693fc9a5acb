/// The four-field result of a successful fetch.
///
/// Built fresh for every request/response cycle and handed straight to the
/// render step; nothing is kept between fetches.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherSnapshot {
    pub temperature: f64,
    pub description: String,
    pub humidity: f64,
    pub wind_speed: f64,
}
