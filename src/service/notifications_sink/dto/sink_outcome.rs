use serde_json::Value;

const DUPLICATE_MARKER: &str = "Duplicate notification ignored";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkOutcome {
    Accepted,
    /// Sink already holds the same notification
    Duplicate,
    /// Sink refused to store notification
    Rejected,
}

///
/// Only a literal `false` in `success` means rejection.
/// Any other shape of a valid JSON body is an acceptance.
///
impl From<&Value> for SinkOutcome {
    fn from(value: &Value) -> Self {
        if value.get("message").and_then(Value::as_str) == Some(DUPLICATE_MARKER) {
            return SinkOutcome::Duplicate;
        }

        match value.get("success") {
            Some(Value::Bool(false)) => SinkOutcome::Rejected,
            _ => SinkOutcome::Accepted,
        }
    }
}
