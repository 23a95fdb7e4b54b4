//! Core library for the city weather widget.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The WeatherAPI.com provider behind a provider trait
//! - The input reader, the HTML renderer and the widget flow tying them together
//!
//! It is used by `weather-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod input;
pub mod model;
pub mod page;
pub mod provider;
pub mod render;
pub mod widget;

pub use config::Config;
pub use error::{FetchError, WidgetError};
pub use input::read_city;
pub use model::{CityQuery, WeatherReading};
pub use page::render_page;
pub use provider::{WeatherProvider, provider_from_config, weatherapi::WeatherApiProvider};
pub use render::render_reading;
pub use widget::{Notifier, OutputContainer, Submission, WeatherWidget};
