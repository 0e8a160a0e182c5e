use lifeconnect::config::DataMode;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn parse_data_mode(raw: &str) -> Result<DataMode, String> {
    raw.parse::<DataMode>().map_err(|err| err.to_string())
}
