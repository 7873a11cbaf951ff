#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RangeError {
    #[error("Range bound {value} has no {unit} equivalent")]
    UndefinedConversion { unit: String, value: f64 },

    #[error("Range bounds must be finite, got ({0}, {1})")]
    NonFinite(f64, f64),
}
