/// Rejected scratch surface configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} must be a positive finite number, got {value}")]
    NonPositiveDimension { name: &'static str, value: f64 },
    #[error("reveal threshold must be in (0, 1], got {0}")]
    ThresholdOutOfRange(f64),
    #[error("scratch grid of {cols}x{rows} cells is too large")]
    GridTooLarge { cols: u64, rows: u64 },
}
