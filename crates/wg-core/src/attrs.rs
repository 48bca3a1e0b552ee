//! Dynamically keyed attribute maps attached to source graph elements.
//!
//! Map extracts carry an open-ended set of tags per node and edge.  Only a
//! handful of keys are ever read (`x`, `y`, `highway`, `geometry`); the rest
//! ride along untouched, so attributes are a string-keyed map of variant
//! values rather than a fixed record.  An absent attribute is simply a
//! missing key.

use rustc_hash::FxHashMap;

use crate::{LonLat, WgError, WgResult};

// ── AttrValue ─────────────────────────────────────────────────────────────────

/// One attribute value.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AttrValue {
    Str(String),
    Num(f64),
    Int(i64),
    Bool(bool),
    /// A polyline of `(lon, lat)` vertices.
    Line(Vec<LonLat>),
}

impl AttrValue {
    /// Numeric view: `Num` as-is, `Int` widened.  Anything else is `None`.
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            AttrValue::Num(v) => Some(v),
            AttrValue::Int(v) => Some(v as f64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_line(&self) -> Option<&[LonLat]> {
        match self {
            AttrValue::Line(l) => Some(l),
            _ => None,
        }
    }

    /// Short name of the variant, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            AttrValue::Str(_)  => "string",
            AttrValue::Num(_)  => "number",
            AttrValue::Int(_)  => "integer",
            AttrValue::Bool(_) => "boolean",
            AttrValue::Line(_) => "linestring",
        }
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        AttrValue::Str(s.to_owned())
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        AttrValue::Str(s)
    }
}

impl From<f64> for AttrValue {
    fn from(v: f64) -> Self {
        AttrValue::Num(v)
    }
}

impl From<i64> for AttrValue {
    fn from(v: i64) -> Self {
        AttrValue::Int(v)
    }
}

impl From<bool> for AttrValue {
    fn from(v: bool) -> Self {
        AttrValue::Bool(v)
    }
}

impl From<Vec<LonLat>> for AttrValue {
    fn from(v: Vec<LonLat>) -> Self {
        AttrValue::Line(v)
    }
}

// ── AttrMap ───────────────────────────────────────────────────────────────────

/// String-keyed attribute map.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct AttrMap(FxHashMap<String, AttrValue>);

impl AttrMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key`, returning the previous value if there was one.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Option<AttrValue> {
        self.0.insert(key.into(), value.into())
    }

    #[inline]
    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        self.0.get(key)
    }

    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// String value of `key`; `None` when absent or not a string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(AttrValue::as_str)
    }

    /// Required numeric attribute.
    ///
    /// # Errors
    ///
    /// [`WgError::MissingAttr`] if `key` is absent, [`WgError::AttrType`] if
    /// it holds something other than a number.
    pub fn require_f64(&self, key: &'static str, owner: impl FnOnce() -> String) -> WgResult<f64> {
        match self.get(key) {
            None => Err(WgError::MissingAttr { owner: owner(), key }),
            Some(value) => value.as_f64().ok_or_else(|| WgError::AttrType {
                owner:    owner(),
                key,
                expected: "number",
                found:    value.type_name(),
            }),
        }
    }
}

impl<K: Into<String>, V: Into<AttrValue>> FromIterator<(K, V)> for AttrMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
