use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

/// Filter directive for the configured level. `verbose` forces debug output
/// for this crate and for HTTP request tracing.
#[must_use]
pub fn filter_directive(config: &LoggingConfig, verbose: bool) -> String {
    if verbose {
        "travelguide=debug,tower_http=debug,info".to_string()
    } else {
        format!("travelguide={level},tower_http={level},warn", level = config.level)
    }
}

/// Install the global tracing subscriber. `RUST_LOG` wins over the config.
pub fn init(config: &LoggingConfig, verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(config, verbose)));

    let registry = tracing_subscriber::registry().with(filter);

    if config.format == "json" {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_thread_ids(false)
                    .json(),
            )
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(false).pretty())
            .init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_directive_uses_level() {
        let config = LoggingConfig {
            level: "warn".to_string(),
            format: "pretty".to_string(),
        };
        assert_eq!(
            filter_directive(&config, false),
            "travelguide=warn,tower_http=warn,warn"
        );
        assert!(filter_directive(&config, true).starts_with("travelguide=debug"));
    }
}
