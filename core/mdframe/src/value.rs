//! FILENAME: core/mdframe/src/value.rs
//! PURPOSE: The scalar values a variable can hold and their textual form.
//! CONTEXT: `Scalar` is a closed set of kinds. Anything that needs to treat
//! the kinds differently (formatting, mostly) goes through `ScalarVisitor`
//! so adding a kind is a compile error everywhere it matters.

use serde::{Deserialize, Serialize};

/// A single value fetched from a variable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Scalar {
    Int(i64),
    Float(f64),
    Bool(bool),
    Text(String),
}

/// The kind tag of a `Scalar` (and of a variable's storage).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalarKind {
    Int,
    Float,
    Bool,
    Text,
}

/// Dispatch over the scalar kinds, one method per kind.
pub trait ScalarVisitor {
    type Output;

    fn visit_int(&mut self, value: i64) -> Self::Output;
    fn visit_float(&mut self, value: f64) -> Self::Output;
    fn visit_bool(&mut self, value: bool) -> Self::Output;
    fn visit_text(&mut self, value: &str) -> Self::Output;
}

impl Scalar {
    pub fn kind(&self) -> ScalarKind {
        match self {
            Scalar::Int(_) => ScalarKind::Int,
            Scalar::Float(_) => ScalarKind::Float,
            Scalar::Bool(_) => ScalarKind::Bool,
            Scalar::Text(_) => ScalarKind::Text,
        }
    }

    pub fn accept<V: ScalarVisitor>(&self, visitor: &mut V) -> V::Output {
        match self {
            Scalar::Int(v) => visitor.visit_int(*v),
            Scalar::Float(v) => visitor.visit_float(*v),
            Scalar::Bool(v) => visitor.visit_bool(*v),
            Scalar::Text(v) => visitor.visit_text(v),
        }
    }

    /// Textual form used for table output.
    pub fn to_text(&self) -> String {
        self.accept(&mut TextVisitor)
    }
}

/// Converts a scalar to the text written into a table field.
///
/// Floats use the shortest representation that round-trips, so `2.0`
/// becomes `2` and `0.1` stays `0.1`. Text is passed through untouched;
/// embedded commas are not escaped.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextVisitor;

impl ScalarVisitor for TextVisitor {
    type Output = String;

    fn visit_int(&mut self, value: i64) -> String {
        value.to_string()
    }

    fn visit_float(&mut self, value: f64) -> String {
        value.to_string()
    }

    fn visit_bool(&mut self, value: bool) -> String {
        value.to_string()
    }

    fn visit_text(&mut self, value: &str) -> String {
        value.to_string()
    }
}

impl From<i64> for Scalar {
    fn from(v: i64) -> Self {
        Scalar::Int(v)
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Scalar::Float(v)
    }
}

impl From<bool> for Scalar {
    fn from(v: bool) -> Self {
        Scalar::Bool(v)
    }
}

impl From<&str> for Scalar {
    fn from(v: &str) -> Self {
        Scalar::Text(v.to_string())
    }
}

impl From<String> for Scalar {
    fn from(v: String) -> Self {
        Scalar::Text(v)
    }
}
