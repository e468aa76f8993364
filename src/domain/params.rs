use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
/// Scalar value accepted as a request parameter.
///
/// The gateway consumes everything as text; typed variants exist so callers
/// can pass numbers and booleans without formatting them first.
pub enum ParamValue {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl ParamValue {
    /// Canonical wire form of the value.
    pub fn to_wire(&self) -> String {
        match self {
            Self::Str(value) => value.clone(),
            Self::Int(value) => value.to_string(),
            Self::Float(value) => value.to_string(),
            Self::Bool(value) => value.to_string(),
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(value) => f.write_str(value),
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Bool(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
/// Request parameters keyed by name.
///
/// Keys are kept in sorted order so encoded requests are deterministic.
pub struct Params(BTreeMap<String, ParamValue>);

impl Params {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a parameter, consuming and returning the set for chaining.
    pub fn set(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert a parameter, replacing any previous value under the same key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        self.0.insert(key.into(), value.into());
    }

    /// Whether a parameter with this name is present.
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Borrow the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over parameters in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Convert every value to its canonical string form, keys untouched.
    ///
    /// Idempotent: normalizing an already-normalized set yields the same set.
    pub fn normalized(&self) -> Self {
        Self(
            self.0
                .iter()
                .map(|(key, value)| (key.clone(), ParamValue::Str(value.to_wire())))
                .collect(),
        )
    }

    /// Rewrite every `underscore_case` key as `camelCase`, values untouched.
    pub fn camelized(&self) -> Self {
        Self(
            self.0
                .iter()
                .map(|(key, value)| (camelize(key), value.clone()))
                .collect(),
        )
    }
}

impl<K: Into<String>, V: Into<ParamValue>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

/// Convert an `underscore_case` key to `camelCase`.
///
/// An underscore only acts as a separator when followed by an alphanumeric
/// character; keys without underscores pass through unchanged.
pub fn camelize(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut chars = key.chars().peekable();
    while let Some(ch) = chars.next() {
        let next = chars.peek().copied().filter(|c| c.is_alphanumeric());
        if let ('_', Some(next)) = (ch, next) {
            chars.next();
            out.extend(next.to_uppercase());
        } else {
            out.push(ch);
        }
    }
    out
}
