//! Wires the demo features around the process-wide shared state.

use thiserror::Error;
use tokio::task::JoinError;

use crate::config::{ConfigError, DemoConfig};
use crate::shutdown::ShutdownHandle;
use crate::state::SharedStateError;
use crate::ui::dashboard::{DashboardFeature, DashboardState};
use crate::ui::producer::{ProducerFeature, ProducerState};
use crate::ui::thermometer::{ThermometerFeature, ThermometerState};

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("Invalid config: {0}")]
    Config(#[from] ConfigError),

    #[error("Shared state error: {0}")]
    SharedState(#[from] SharedStateError),

    #[error("Feature task failed: {0}")]
    Task(#[from] JoinError),
}

/// Final state of every feature after shutdown.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoSummary {
    pub producer: ProducerState,
    pub dashboard: DashboardState,
    pub thermometer: ThermometerState,
}

impl DemoSummary {
    /// Plain-text rendering, one line per feature.
    pub fn render(&self) -> String {
        format!(
            "producer:    temperature={}\n\
             dashboard:   temperature={} greeting={}\n\
             thermometer: temperature={}",
            self.producer.temperature_string(),
            self.dashboard.temperature_string(),
            self.dashboard.greeting_string(),
            self.thermometer.temperature_string(),
        )
    }
}

/// Run all features until `shutdown` is signalled.
///
/// The config is validated before any task starts. Each feature resolves
/// its own views from the process registry; none of them is handed a store.
pub async fn run(config: DemoConfig, shutdown: ShutdownHandle) -> Result<DemoSummary, RuntimeError> {
    config.validate()?;
    let producer = ProducerFeature::from_registry()?;
    let dashboard = DashboardFeature::from_registry()?;
    let thermometer = ThermometerFeature::from_registry()?;

    tracing::info!("Starting features");
    let dashboard = tokio::spawn(dashboard.run(shutdown.clone()));
    let thermometer = tokio::spawn(thermometer.run(shutdown.clone()));
    let producer = tokio::spawn(producer.run(config.producer, shutdown.clone()));

    Ok(DemoSummary {
        producer: producer.await?,
        dashboard: dashboard.await?,
        thermometer: thermometer.await?,
    })
}
