//! Standalone page around the output container, so a rendered reading can be
//! opened directly in a browser.

use maud::{DOCTYPE, PreEscaped, html};

/// Wrap the container markup in a full HTML document with the city form.
///
/// `city` pre-fills the input; `container` is inserted as-is since it is
/// already produced by [`crate::render::render_reading`].
pub fn render_page(city: Option<&str>, container: &str) -> String {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { "Weather" }
            }
            body {
                form {
                    input type="text" id="cityInput" name="city" placeholder="Enter city"
                        value=(city.unwrap_or_default());
                    button type="submit" { "Get Weather" }
                }
                div id="weatherInfo" { (PreEscaped(container)) }
            }
        }
    }
    .into_string()
}
