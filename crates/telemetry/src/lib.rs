//! Tracing subscriber bootstrap.

use anyhow::{anyhow, Context};
use tracing_subscriber::EnvFilter;

use bookshelf_kernel::settings::{LogFormat, TelemetrySettings};

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured filter. Fails if a global
/// subscriber is already installed.
pub fn init(settings: &TelemetrySettings) -> anyhow::Result<()> {
    let filter = build_filter(settings)?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let installed = match settings.log_format {
        LogFormat::Pretty => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    installed.map_err(|e| anyhow!("failed to install tracing subscriber: {e}"))?;

    tracing::info!(
        target: "bookshelf-telemetry",
        format = ?settings.log_format,
        "telemetry initialized"
    );
    Ok(())
}

fn build_filter(settings: &TelemetrySettings) -> anyhow::Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&settings.filter)
            .with_context(|| format!("invalid log filter '{}'", settings.filter)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_filter_is_parsed() {
        let settings = TelemetrySettings {
            filter: "warn,bookshelf_http=debug".to_string(),
            ..TelemetrySettings::default()
        };
        assert!(build_filter(&settings).is_ok());
    }

    #[test]
    fn second_init_reports_error() {
        let settings = TelemetrySettings::default();
        let _ = init(&settings);
        let err = init(&settings).unwrap_err();
        assert!(err
            .to_string()
            .starts_with("failed to install tracing subscriber"));
    }
}
