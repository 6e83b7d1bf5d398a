use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FxError {
    /// A tunable was outside its accepted range at construction time.
    #[error("invalid config: {field} = {value}")]
    InvalidConfig { field: &'static str, value: f64 },
}
