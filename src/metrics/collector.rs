//! Metrics collection and registry.

use crate::preview::{PreviewSelection, SelectionKind};
use prometheus::{Encoder, IntCounter, IntCounterVec, IntGauge, Opts, Registry, TextEncoder};
use thiserror::Error;

/// Errors that can occur during metrics operations.
#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("prometheus error: {0}")]
    Prometheus(#[from] prometheus::Error),
}

const OUTCOMES: [&str; 3] = ["exact", "closest", "fallback"];

/// Prometheus metrics registry for camera configuration.
pub struct MetricsRegistry {
    registry: Registry,

    // Preview selection
    selections_total: IntCounterVec,
    preview_width: IntGauge,
    preview_height: IntGauge,

    // Device configuration
    configurations_total: IntCounter,
    configuration_failures_total: IntCounter,
    torch_lit: IntGauge,
}

impl MetricsRegistry {
    /// Creates a new registry with all camera metrics registered.
    pub fn new() -> Result<Self, MetricsError> {
        let registry = Registry::new();

        let selections_total = IntCounterVec::new(
            Opts::new(
                "scanner_camera_preview_selections_total",
                "Preview size selections by outcome",
            ),
            &["outcome"],
        )?;
        let preview_width = IntGauge::new(
            "scanner_camera_preview_width_pixels",
            "Width of the last selected preview size",
        )?;
        let preview_height = IntGauge::new(
            "scanner_camera_preview_height_pixels",
            "Height of the last selected preview size",
        )?;
        let configurations_total = IntCounter::new(
            "scanner_camera_configurations_total",
            "Parameter sets successfully written to a device",
        )?;
        let configuration_failures_total = IntCounter::new(
            "scanner_camera_configuration_failures_total",
            "Parameter writes rejected by a device",
        )?;
        let torch_lit = IntGauge::new(
            "scanner_camera_torch_lit",
            "Current torch state (1=lit, 0=off)",
        )?;

        registry.register(Box::new(selections_total.clone()))?;
        registry.register(Box::new(preview_width.clone()))?;
        registry.register(Box::new(preview_height.clone()))?;
        registry.register(Box::new(configurations_total.clone()))?;
        registry.register(Box::new(configuration_failures_total.clone()))?;
        registry.register(Box::new(torch_lit.clone()))?;

        // Export every outcome from the start, even at zero
        for outcome in OUTCOMES {
            selections_total.with_label_values(&[outcome]);
        }

        Ok(Self {
            registry,
            selections_total,
            preview_width,
            preview_height,
            configurations_total,
            configuration_failures_total,
            torch_lit,
        })
    }

    /// Records the outcome of a preview-size selection.
    pub fn record_selection(&self, selection: &PreviewSelection) {
        let outcome = match selection.kind {
            SelectionKind::Exact => OUTCOMES[0],
            SelectionKind::Closest { .. } => OUTCOMES[1],
            SelectionKind::Fallback => OUTCOMES[2],
        };
        self.selections_total.with_label_values(&[outcome]).inc();
        self.preview_width.set(i64::from(selection.size.width));
        self.preview_height.set(i64::from(selection.size.height));
    }

    /// Records the result of writing a configuration to a device.
    pub fn record_configuration(&self, succeeded: bool) {
        if succeeded {
            self.configurations_total.inc();
        } else {
            self.configuration_failures_total.inc();
        }
    }

    /// Records the current torch state.
    pub fn record_torch(&self, lit: bool) {
        self.torch_lit.set(i64::from(lit));
    }

    /// Returns the underlying Prometheus registry.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Encodes all metrics in Prometheus text format.
    pub fn encode(&self) -> Result<String, MetricsError> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}
