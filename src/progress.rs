use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

const TICK_INTERVAL: Duration = Duration::from_millis(500);
// The last entry is shown once the spinner is finished.
const TICK_FRAMES: &[&str] = &["|", "/", "~", "\\", ""];

/// Console spinner animated on indicatif's steady-tick thread.
pub struct Spinner {
    bar: ProgressBar,
}

impl Spinner {
    pub fn start(message: &str) -> Self {
        let style = ProgressStyle::with_template("{msg:.yellow}{spinner}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(TICK_FRAMES);
        let bar = ProgressBar::new_spinner().with_style(style).with_message(message.to_string());
        bar.enable_steady_tick(TICK_INTERVAL);
        Self { bar }
    }

    pub fn finish(self) {
        self.bar.finish_and_clear();
    }
}
