use serde_json::Value;

/// Outcome of a typed field access on an untyped report.
///
/// Callers treat `Absent` and `Mismatch` the same way at the emission layer
/// (skip the field); the distinction only matters for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extract<T> {
    Value(T),
    Absent,
    Mismatch,
}

impl<T> Extract<T> {
    #[must_use]
    pub fn ok(self) -> Option<T> {
        match self {
            Extract::Value(value) => Some(value),
            Extract::Absent | Extract::Mismatch => None,
        }
    }

    #[must_use]
    pub const fn is_value(&self) -> bool {
        matches!(self, Extract::Value(_))
    }
}

/// Typed-access wrapper over one decoded report object.
///
/// Keys may be direct (`"bytesSent"`) or dotted paths into nested objects
/// (`"outer.inner"`). Accessors never panic; malformed shapes resolve to
/// `Absent` or `Mismatch`.
#[derive(Debug, Clone, Copy)]
pub struct Report<'raw> {
    value: &'raw Value,
}

impl<'raw> Report<'raw> {
    #[must_use]
    pub const fn new(value: &'raw Value) -> Self {
        Self { value }
    }

    #[must_use]
    pub fn str_field(&self, key: &str) -> Extract<&'raw str> {
        match self.lookup(key) {
            None => Extract::Absent,
            Some(value) => value.as_str().map_or(Extract::Mismatch, Extract::Value),
        }
    }

    /// Integer access. Succeeds for any JSON number representable as `i64`.
    #[must_use]
    pub fn i64_field(&self, key: &str) -> Extract<i64> {
        match self.lookup(key) {
            None => Extract::Absent,
            Some(value) => value.as_i64().map_or(Extract::Mismatch, Extract::Value),
        }
    }

    /// Float access. Integer-valued JSON numbers are extractable here as
    /// well; upstream mixes both representations for the same counter.
    #[must_use]
    pub fn f64_field(&self, key: &str) -> Extract<f64> {
        match self.lookup(key) {
            None => Extract::Absent,
            Some(value) => value.as_f64().map_or(Extract::Mismatch, Extract::Value),
        }
    }

    #[must_use]
    pub fn bool_field(&self, key: &str) -> Extract<bool> {
        match self.lookup(key) {
            None => Extract::Absent,
            Some(value) => value.as_bool().map_or(Extract::Mismatch, Extract::Value),
        }
    }

    /// Label-value access: strings come through verbatim, numbers and
    /// booleans are stringified, and anything else (including an absent
    /// field) becomes the empty string so one missing label never drops a
    /// whole report.
    #[must_use]
    pub fn label_field(&self, key: &str) -> String {
        match self.lookup(key) {
            Some(Value::String(text)) => text.clone(),
            Some(Value::Number(number)) => number.to_string(),
            Some(Value::Bool(flag)) => flag.to_string(),
            Some(Value::Null | Value::Array(_) | Value::Object(_)) | None => String::new(),
        }
    }

    fn lookup(&self, key: &str) -> Option<&'raw Value> {
        if !key.contains('.') {
            return self.value.get(key);
        }
        let mut current = self.value;
        for segment in key.split('.') {
            current = current.get(segment)?;
        }
        Some(current)
    }
}
