//! Log output setup for the newsjudge binary.

use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Install a stderr subscriber for the process.
///
/// `RUST_LOG` wins over `level` when set. With `json`, each event is written
/// as one JSON object per line; otherwise as human-readable text. Stdout is
/// left alone so verdict output can be piped. If a subscriber is already
/// installed this does nothing.
pub fn init_tracing(json: bool, level: Level) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    let json_layer = json.then(|| {
        fmt::layer()
            .json()
            .with_target(false)
            .with_writer(std::io::stderr)
    });
    let text_layer = (!json).then(|| {
        fmt::layer()
            .with_target(false)
            .with_writer(std::io::stderr)
    });

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(text_layer)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_ignored() {
        init_tracing(false, Level::WARN);
        init_tracing(true, Level::DEBUG);
        tracing::warn!(event = "telemetry.test", "still logging after re-init");
    }
}
