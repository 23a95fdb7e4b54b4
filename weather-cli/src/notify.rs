use weather_core::Notifier;

/// Shows widget notices on stderr, keeping stdout for the rendered output.
#[derive(Debug, Default)]
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn notify(&self, message: &str) {
        eprintln!("{message}");
    }
}
