//! Log output for `polls`
//!
//! Events go to stdout in compact form: one line per HTTP request from the
//! server's trace layer, plus `poll created` / `vote recorded` events and
//! startup messages. `RUST_LOG` wins over `--debug`, so
//! `RUST_LOG=polls_server=debug,sqlx=warn` works as expected.
//!
//! With `--otel` (and the `telemetry` feature) the same spans are exported
//! over OTLP/gRPC to `OTEL_EXPORTER_OTLP_ENDPOINT` (default
//! `http://localhost:4317`) under `OTEL_SERVICE_NAME` (default `polls`).

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Logging flags taken from the command line
#[derive(Debug, Clone, Default)]
pub struct TracingConfig {
    /// `--debug`: debug level and event targets when RUST_LOG is unset
    pub debug: bool,
    /// `--otel`: export request spans
    pub otel: bool,
}

impl TracingConfig {
    fn filter(&self) -> EnvFilter {
        let fallback = if self.debug { "debug" } else { "info" };
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
    }
}

/// Stdout only
fn init_console(config: &TracingConfig) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(config.filter())
        .with_target(config.debug)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

/// Stdout plus OTLP span export
#[cfg(feature = "telemetry")]
fn init_with_otlp(config: &TracingConfig) -> Result<()> {
    use opentelemetry::trace::TracerProvider as _;
    use opentelemetry::KeyValue;
    use opentelemetry_otlp::WithExportConfig;
    use opentelemetry_sdk::trace::TracerProvider;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let endpoint = std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT")
        .unwrap_or_else(|_| "http://localhost:4317".to_string());
    let service_name = std::env::var("OTEL_SERVICE_NAME").unwrap_or_else(|_| "polls".to_string());

    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(&endpoint)
        .build()
        .map_err(|e| anyhow!("Failed to create OTLP exporter: {}", e))?;

    let provider = TracerProvider::builder()
        .with_batch_exporter(exporter, opentelemetry_sdk::runtime::Tokio)
        .with_resource(opentelemetry_sdk::Resource::new(vec![KeyValue::new(
            "service.name",
            service_name.clone(),
        )]))
        .build();

    let tracer = provider.tracer("polls");
    // Flushed by shutdown_otel before exit
    let _ = opentelemetry::global::set_tracer_provider(provider);

    tracing_subscriber::registry()
        .with(config.filter())
        .with(tracing_subscriber::fmt::layer().with_target(config.debug).compact())
        .with(tracing_opentelemetry::layer().with_tracer(tracer))
        .try_init()
        .map_err(|err| anyhow!(err))?;

    tracing::info!(endpoint = %endpoint, service = %service_name, "exporting spans over OTLP");
    Ok(())
}

/// Flush spans still queued for export; called once `main` is done
#[cfg(feature = "telemetry")]
pub fn shutdown_otel() {
    opentelemetry::global::shutdown_tracer_provider();
}

#[cfg(not(feature = "telemetry"))]
pub fn shutdown_otel() {}

/// Install the global subscriber. `--otel` without the feature only warns.
pub fn init(config: &TracingConfig) -> Result<()> {
    #[cfg(feature = "telemetry")]
    if config.otel {
        return init_with_otlp(config);
    }

    #[cfg(not(feature = "telemetry"))]
    if config.otel {
        eprintln!("warning: --otel ignored, built without the `telemetry` feature");
    }

    init_console(config)
}

