use serde::Serialize;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// One labeled field read, rendered as `<label> = <value>`.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct FieldLine {
    pub label: String,
    pub value: i32,
}

impl FieldLine {
    pub fn new(label: &str, value: i32) -> Self {
        Self {
            label: label.to_string(),
            value,
        }
    }

    pub fn render(&self) -> String {
        format!("{} = {}", self.label, self.value)
    }
}

/// Everything one walk printed, in print order.
#[derive(Debug, Serialize)]
pub struct ScopeReport {
    pub scope: String,
    pub lines: Vec<FieldLine>,
}
