use disc_assessment::assessment::BankVariant;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn parse_variant(raw: &str) -> Result<BankVariant, String> {
    BankVariant::parse(raw)
        .ok_or_else(|| format!("unknown assessment variant '{raw}' (expected 'long' or 'short')"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_variant_accepts_both_banks() {
        assert_eq!(parse_variant("long"), Ok(BankVariant::LongForm));
        assert_eq!(parse_variant(" SHORT "), Ok(BankVariant::ShortForm));
    }

    #[test]
    fn parse_variant_reports_the_bad_value() {
        let err = parse_variant("medium").expect_err("rejected");
        assert!(err.contains("'medium'"));
    }
}
