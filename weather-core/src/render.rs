//! HTML presentation of a [`WeatherReading`].

use maud::{Markup, Render, html};

use crate::model::WeatherReading;

/// Render the fixed six-field fragment that replaces the output container.
pub fn render_reading(reading: &WeatherReading) -> String {
    reading.render().into_string()
}

impl Render for WeatherReading {
    fn render(&self) -> Markup {
        html! {
            p { strong { "City:" } " " (self.location_name) } "\n"
            p { strong { "Country:" } " " (self.country_name) } "\n"
            p { strong { "Temperature:" } " " (self.temperature_celsius) "°C" } "\n"
            p { strong { "Wind Speed:" } " " (self.wind_speed_kph) " kph" } "\n"
            p { strong { "Wind Direction:" } " " (self.wind_direction) } "\n"
            p {
                strong { "Cloudiness:" } " "
                img src=(self.condition_icon_url) alt="Cloudiness Icon";
                " " (self.condition_text)
            } "\n"
        }
    }
}
