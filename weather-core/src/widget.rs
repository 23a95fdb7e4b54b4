//! The widget flow: read the city, fetch once, render into the container.

use std::{
    fmt::Debug,
    sync::{
        Mutex, PoisonError,
        atomic::{AtomicU64, Ordering},
    },
};

use tracing::{debug, info, warn};

use crate::{
    error::WidgetError, input::read_city, model::WeatherReading, provider::WeatherProvider,
    render::render_reading,
};

/// Where user-visible failure notices go (an alert, a stderr line, ...).
pub trait Notifier: Send + Sync + Debug {
    fn notify(&self, message: &str);
}

/// The element whose markup is replaced on every successful render.
#[derive(Debug, Default)]
pub struct OutputContainer {
    markup: Mutex<String>,
}

impl OutputContainer {
    pub fn markup(&self) -> String {
        self.markup.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

/// Result of a submission that got past validation and fetched successfully.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    /// The reading is now what the container shows.
    Rendered(WeatherReading),
    /// A newer submission was issued while this one was in flight; its
    /// response was dropped and the container left alone.
    Superseded(WeatherReading),
}

#[derive(Debug)]
pub struct WeatherWidget {
    provider: Box<dyn WeatherProvider>,
    notifier: Box<dyn Notifier>,
    container: OutputContainer,
    issued: AtomicU64,
}

impl WeatherWidget {
    pub fn new(provider: Box<dyn WeatherProvider>, notifier: Box<dyn Notifier>) -> Self {
        Self {
            provider,
            notifier,
            container: OutputContainer::default(),
            issued: AtomicU64::new(0),
        }
    }

    pub fn container(&self) -> &OutputContainer {
        &self.container
    }

    /// Run one user trigger to completion.
    ///
    /// Blank input and fetch failures are reported through the notifier and
    /// returned; in both cases the container keeps its previous markup.
    pub async fn submit(&self, raw_city: &str) -> Result<Submission, WidgetError> {
        let city = match read_city(raw_city) {
            Ok(city) => city,
            Err(err) => {
                self.notifier.notify(err.notice());
                return Err(err);
            }
        };

        let ticket = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(ticket, %city, "fetching current weather");

        let reading = match self.provider.current(&city).await {
            Ok(reading) => reading,
            Err(err) => {
                warn!(ticket, %city, error = %err, "weather fetch failed");
                let err = WidgetError::from(err);
                self.notifier.notify(err.notice());
                return Err(err);
            }
        };

        let html = render_reading(&reading);

        let mut markup = self.container.markup.lock().unwrap_or_else(PoisonError::into_inner);
        if self.issued.load(Ordering::SeqCst) != ticket {
            debug!(ticket, %city, "discarding response of superseded request");
            return Ok(Submission::Superseded(reading));
        }
        *markup = html;
        drop(markup);

        info!(ticket, location = %reading.location_name, "rendered weather");
        Ok(Submission::Rendered(reading))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use tokio::sync::Notify;

    use super::*;
    use crate::{
        CityQuery,
        error::{FETCH_NOTICE, FetchError, VALIDATION_NOTICE},
    };

    #[derive(Debug, Default, Clone)]
    struct RecordingNotifier(Arc<Mutex<Vec<String>>>);

    impl RecordingNotifier {
        fn messages(&self) -> Vec<String> {
            self.0.lock().unwrap().clone()
        }
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, message: &str) {
            self.0.lock().unwrap().push(message.to_string());
        }
    }

    fn reading_for(city: &str) -> WeatherReading {
        WeatherReading {
            location_name: city.to_string(),
            country_name: "Nowhere".into(),
            temperature_celsius: 10.0,
            wind_speed_kph: 5.0,
            wind_direction: "N".into(),
            condition_text: "Clear".into(),
            condition_icon_url: "//icon.png".into(),
            observed_at: None,
        }
    }

    /// Cities starting with "Slow" wait for the gate; "Broken" fails.
    #[derive(Debug, Default)]
    struct FakeProvider {
        gate: Arc<Notify>,
    }

    #[async_trait]
    impl WeatherProvider for FakeProvider {
        async fn current(&self, city: &CityQuery) -> Result<WeatherReading, FetchError> {
            if city.as_str().starts_with("Slow") {
                self.gate.notified().await;
            }
            if city.as_str() == "Broken" {
                return Err(FetchError::Status {
                    status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
                    body: String::new(),
                });
            }
            Ok(reading_for(city.as_str()))
        }
    }

    fn widget() -> (WeatherWidget, RecordingNotifier, Arc<Notify>) {
        let notifier = RecordingNotifier::default();
        let provider = FakeProvider::default();
        let gate = provider.gate.clone();
        let widget = WeatherWidget::new(Box::new(provider), Box::new(notifier.clone()));
        (widget, notifier, gate)
    }

    #[tokio::test]
    async fn blank_input_notifies_without_fetching() {
        let (widget, notifier, _) = widget();

        let err = widget.submit("   ").await.unwrap_err();

        assert!(matches!(err, WidgetError::Validation));
        assert_eq!(notifier.messages(), vec![VALIDATION_NOTICE]);
        assert_eq!(widget.container().markup(), "");
    }

    #[tokio::test]
    async fn failure_keeps_previous_markup() {
        let (widget, notifier, _) = widget();

        widget.submit("Paris").await.unwrap();
        let before = widget.container().markup();
        assert!(before.contains("Paris"));

        let err = widget.submit("Broken").await.unwrap_err();

        assert!(matches!(err, WidgetError::Fetch(_)));
        assert_eq!(notifier.messages(), vec![FETCH_NOTICE]);
        assert_eq!(widget.container().markup(), before);
    }

    #[tokio::test]
    async fn newer_request_wins_over_slower_older_one() {
        let (widget, notifier, gate) = widget();

        let (slow, fast) = tokio::join!(widget.submit("Slow Town"), async {
            let out = widget.submit("Fast City").await;
            gate.notify_one();
            out
        });

        assert_eq!(fast.unwrap(), Submission::Rendered(reading_for("Fast City")));
        assert_eq!(slow.unwrap(), Submission::Superseded(reading_for("Slow Town")));

        let markup = widget.container().markup();
        assert!(markup.contains("Fast City"));
        assert!(!markup.contains("Slow Town"));
        assert!(notifier.messages().is_empty());
    }
}
