use std::{
    fs,
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use inquire::{InquireError, Password, PasswordDisplayMode, Text};
use tracing::info;
use weather_core::{
    Config, Submission, WeatherReading, WeatherWidget, provider_from_config, render_page,
};

use crate::notify::StderrNotifier;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "City weather widget")]
pub struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the WeatherAPI.com key in the config file.
    Configure,

    /// Show current weather for a city.
    Show {
        /// City name.
        city: String,

        /// What to print: the widget fragment, a full page, or the raw reading.
        #[arg(long, value_enum, default_value_t = Format::Html)]
        format: Format,

        /// Write to this file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Prompt for cities repeatedly, rewriting an HTML page after each lookup.
    Watch {
        /// Page to keep up to date.
        #[arg(short, long, default_value = "weather.html")]
        output: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Html,
    Page,
    Json,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<ExitCode> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { city, format, output } => show(&city, format, output).await,
            Command::Watch { output } => watch(output).await,
        }
    }
}

fn configure() -> anyhow::Result<ExitCode> {
    let mut config = Config::load()?;

    let api_key = Password::new("WeatherAPI.com key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    let api_key = api_key.trim();
    if api_key.is_empty() {
        anyhow::bail!("API key must not be empty");
    }

    config.set_api_key(api_key.to_string());
    let path = config.save()?;
    println!("Saved API key to {}", path.display());

    Ok(ExitCode::SUCCESS)
}

fn build_widget() -> anyhow::Result<WeatherWidget> {
    let config = Config::load()?;
    let provider = provider_from_config(&config)?;
    Ok(WeatherWidget::new(provider, Box::new(StderrNotifier)))
}

async fn show(city: &str, format: Format, output: Option<PathBuf>) -> anyhow::Result<ExitCode> {
    let widget = build_widget()?;

    // The notifier has already told the user what went wrong.
    let Ok(Submission::Rendered(reading)) = widget.submit(city).await else {
        return Ok(ExitCode::FAILURE);
    };

    let rendered = render_output(format, city, &reading, &widget.container().markup())?;

    match output {
        Some(path) => write_file(&path, &rendered)?,
        None => print!("{rendered}"),
    }

    Ok(ExitCode::SUCCESS)
}

async fn watch(output: PathBuf) -> anyhow::Result<ExitCode> {
    let widget = build_widget()?;
    write_file(&output, &render_page(None, ""))?;
    println!("Writing to {} (Esc to quit)", output.display());

    loop {
        let city = match Text::new("City:").prompt() {
            Ok(city) => city,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(err) => return Err(err).context("Failed to read city"),
        };

        if let Ok(Submission::Rendered(reading)) = widget.submit(&city).await {
            write_file(&output, &render_page(Some(&city), &widget.container().markup()))?;
            println!(
                "{}, {}: {}°C, {}",
                reading.location_name,
                reading.country_name,
                reading.temperature_celsius,
                reading.condition_text
            );
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Turn a rendered submission into what `show` prints or writes.
fn render_output(
    format: Format,
    city: &str,
    reading: &WeatherReading,
    container: &str,
) -> anyhow::Result<String> {
    let rendered = match format {
        Format::Html => container.to_string(),
        Format::Page => render_page(Some(city), container),
        Format::Json => {
            let mut json = serde_json::to_string_pretty(reading)
                .context("Failed to serialize weather reading")?;
            json.push('\n');
            json
        }
    };

    Ok(rendered)
}

fn write_file(path: &Path, contents: &str) -> anyhow::Result<()> {
    fs::write(path, contents)
        .with_context(|| format!("Failed to write output file: {}", path.display()))?;
    info!(path = %path.display(), "wrote widget output");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_defaults_to_html_on_stdout() {
        let cli = Cli::try_parse_from(["weather", "show", "Paris"]).unwrap();

        match cli.command {
            Command::Show { city, format, output } => {
                assert_eq!(city, "Paris");
                assert_eq!(format, Format::Html);
                assert!(output.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn verbose_is_global_and_counted() {
        let cli =
            Cli::try_parse_from(["weather", "show", "New York", "--format", "json", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn watch_has_default_output() {
        let cli = Cli::try_parse_from(["weather", "watch"]).unwrap();
        match cli.command {
            Command::Watch { output } => assert_eq!(output, PathBuf::from("weather.html")),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn show_requires_a_city() {
        assert!(Cli::try_parse_from(["weather", "show"]).is_err());
    }

    fn paris() -> WeatherReading {
        WeatherReading {
            location_name: "Paris".into(),
            country_name: "France".into(),
            temperature_celsius: 18.0,
            wind_speed_kph: 12.0,
            wind_direction: "NW".into(),
            condition_text: "Cloudy".into(),
            condition_icon_url: "//x/icon.png".into(),
            observed_at: None,
        }
    }

    const CONTAINER: &str = "<p><strong>City:</strong> Paris</p>\n";

    #[test]
    fn html_format_is_the_container_markup() {
        let out = render_output(Format::Html, "Paris", &paris(), CONTAINER).unwrap();
        assert_eq!(out, CONTAINER);
    }

    #[test]
    fn page_format_wraps_the_container() {
        let out = render_output(Format::Page, "Paris", &paris(), CONTAINER).unwrap();

        assert!(out.starts_with("<!DOCTYPE html>"));
        assert!(out.contains(&format!("<div id=\"weatherInfo\">{CONTAINER}</div>")));
        assert!(out.contains("value=\"Paris\""));
    }

    #[test]
    fn json_format_serializes_the_reading() {
        let out = render_output(Format::Json, "Paris", &paris(), CONTAINER).unwrap();
        assert!(out.ends_with('\n'));

        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["location_name"], "Paris");
        assert_eq!(value["country_name"], "France");
        assert_eq!(value["temperature_celsius"], 18.0);
        assert_eq!(value["wind_direction"], "NW");
        assert_eq!(value["condition_icon_url"], "//x/icon.png");
        assert!(value.get("observed_at").is_none());
    }

    #[test]
    fn json_format_includes_observation_time_when_known() {
        let mut reading = paris();
        reading.observed_at = serde_json::from_str("\"2023-11-14T22:13:20Z\"").unwrap();

        let out = render_output(Format::Json, "Paris", &reading, CONTAINER).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["observed_at"], "2023-11-14T22:13:20Z");
    }

    #[test]
    fn write_file_writes_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("weather.html");

        write_file(&path, "first").unwrap();
        write_file(&path, "second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn write_file_reports_the_path_on_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("weather.html");

        let err = write_file(&path, "x").unwrap_err();
        assert!(err.to_string().contains("Failed to write output file"));
    }
}
