use std::fmt;

use serde::{Deserialize, Serialize};

/// A closed set of serializable values for heterogeneous object collections.
///
/// The `Display` impl is the value's string form: it is both the text of the
/// node produced for the value and the input to its [`crate::ObjectKey`].
/// Floats use Rust's formatting (`1e20` renders as `100000000000000000000.0`),
/// so keys are not compatible with other languages' float rendering.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ObjectValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<ObjectValue>),
}

impl ObjectValue {
    /// Infer a value from a literal.
    ///
    /// `None`/`null`, booleans, integers and floats are recognised; a
    /// literal wrapped in matching single or double quotes is the quoted
    /// string; anything else is taken verbatim as a string.
    pub fn parse(literal: &str) -> Self {
        match literal {
            "None" | "null" => return Self::Null,
            "true" | "True" => return Self::Bool(true),
            "false" | "False" => return Self::Bool(false),
            _ => {}
        }
        if let Ok(i) = literal.parse::<i64>() {
            return Self::Int(i);
        }
        if looks_numeric(literal) {
            if let Ok(f) = literal.parse::<f64>() {
                return Self::Float(f);
            }
        }
        for quote in ['"', '\''] {
            if literal.len() >= 2 && literal.starts_with(quote) && literal.ends_with(quote) {
                return Self::Str(literal[1..literal.len() - 1].to_string());
            }
        }
        Self::Str(literal.to_string())
    }

    /// Short name of the variant.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Str(_) => "str",
            Self::List(_) => "list",
        }
    }

    /// Returns `true` for `Str` values.
    pub fn is_str(&self) -> bool {
        matches!(self, Self::Str(_))
    }
}

// `f64::from_str` also accepts words such as "inf" and "NaN"; those stay strings.
fn looks_numeric(literal: &str) -> bool {
    literal
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'))
        && literal.chars().any(|c| c.is_ascii_digit())
}

impl fmt::Display for ObjectValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "None"),
            Self::Bool(true) => write!(f, "True"),
            Self::Bool(false) => write!(f, "False"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) if x.is_finite() && x.fract() == 0.0 => write!(f, "{x}.0"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Str(s) => write!(f, "{s}"),
            Self::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    match item {
                        Self::Str(s) => write!(f, "'{s}'")?,
                        other => write!(f, "{other}")?,
                    }
                }
                write!(f, "]")
            }
        }
    }
}

impl From<i64> for ObjectValue {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<f64> for ObjectValue {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<bool> for ObjectValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<&str> for ObjectValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for ObjectValue {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl<T: Into<ObjectValue>> From<Vec<T>> for ObjectValue {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_scalars() {
        assert_eq!(ObjectValue::from(42).to_string(), "42");
        assert_eq!(ObjectValue::from("hello").to_string(), "hello");
        assert_eq!(ObjectValue::from(3.14).to_string(), "3.14");
        assert_eq!(ObjectValue::from(2.0).to_string(), "2.0");
        assert_eq!(ObjectValue::from(true).to_string(), "True");
        assert_eq!(ObjectValue::Null.to_string(), "None");
    }

    #[test]
    fn display_large_integral_float() {
        assert_eq!(
            ObjectValue::from(1e20).to_string(),
            "100000000000000000000.0"
        );
    }

    #[test]
    fn display_list_quotes_strings() {
        let list = ObjectValue::List(vec![
            ObjectValue::from(1),
            ObjectValue::from("a"),
            ObjectValue::List(vec![]),
        ]);
        assert_eq!(list.to_string(), "[1, 'a', []]");
    }

    #[test]
    fn int_and_str_forms_coincide() {
        // Same string form, so a mapping keys them identically.
        assert_eq!(
            ObjectValue::from(42).to_string(),
            ObjectValue::from("42").to_string()
        );
    }

    #[test]
    fn parse_infers_variants() {
        assert_eq!(ObjectValue::parse("42"), ObjectValue::Int(42));
        assert_eq!(ObjectValue::parse("-7"), ObjectValue::Int(-7));
        assert_eq!(ObjectValue::parse("3.14"), ObjectValue::Float(3.14));
        assert_eq!(ObjectValue::parse("1e3"), ObjectValue::Float(1000.0));
        assert_eq!(ObjectValue::parse("True"), ObjectValue::Bool(true));
        assert_eq!(ObjectValue::parse("null"), ObjectValue::Null);
        assert_eq!(ObjectValue::parse("hello"), ObjectValue::from("hello"));
        assert_eq!(ObjectValue::parse("inf"), ObjectValue::from("inf"));
        assert_eq!(ObjectValue::parse("\"42\""), ObjectValue::from("42"));
        assert_eq!(ObjectValue::parse("'x y'"), ObjectValue::from("x y"));
        assert_eq!(ObjectValue::parse("'"), ObjectValue::from("'"));
    }

    #[test]
    fn kind_names() {
        assert_eq!(ObjectValue::from(1).kind(), "int");
        assert_eq!(ObjectValue::from("s").kind(), "str");
        assert!(ObjectValue::from("s").is_str());
    }

    #[test]
    fn serde_roundtrip() {
        let value = ObjectValue::from(vec![1i64, 2, 3]);
        let json = serde_json::to_string(&value).unwrap();
        let parsed: ObjectValue = serde_json::from_str(&json).unwrap();
        assert_eq!(value, parsed);
    }
}
