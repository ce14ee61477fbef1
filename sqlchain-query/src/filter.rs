//! # Filter
//!
//! A single `WHERE` predicate, use for `select, delete, update`.
//! Composite predicates are not supported, setting a new filter replaces the
//! previous one.

use std::fmt;

use crate::sanitize;

/// Comparison operator of a filter
///
/// The comparison set is emitted verbatim, entity encoding `<` or `>` would not
/// be valid sql. Only [`Operator::Custom`] text goes through [`sanitize`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operator {
    Eq,
    Ne,
    LtGt,
    Lt,
    Le,
    Gt,
    Ge,
    Like,
    NotLike,
    /// Any other operator text, built by [`Operator::custom`]
    Custom(CustomOperator),
}

/// Sanitized operator text, can only be built through [`Operator::custom`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomOperator(String);

impl CustomOperator {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Operator {
    /// Operator outside the comparison set, text is sanitized
    pub fn custom(op: &str) -> Self {
        Self::Custom(CustomOperator(sanitize(op)))
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Eq => "=",
            Self::Ne => "!=",
            Self::LtGt => "<>",
            Self::Lt => "<",
            Self::Le => "<=",
            Self::Gt => ">",
            Self::Ge => ">=",
            Self::Like => "LIKE",
            Self::NotLike => "NOT LIKE",
            Self::Custom(op) => op.as_str(),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Operator {
    fn from(op: &str) -> Self {
        match op.trim() {
            "=" => Self::Eq,
            "!=" => Self::Ne,
            "<>" => Self::LtGt,
            "<" => Self::Lt,
            "<=" => Self::Le,
            ">" => Self::Gt,
            ">=" => Self::Ge,
            s if s.eq_ignore_ascii_case("like") => Self::Like,
            s if s.eq_ignore_ascii_case("not like") => Self::NotLike,
            s => Self::custom(s),
        }
    }
}

impl From<String> for Operator {
    fn from(op: String) -> Self {
        Self::from(op.as_str())
    }
}

/// `field operator 'value'`, field and value sanitized
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    field: String,
    operator: Operator,
    value: String,
}

impl Filter {
    pub fn new<O>(field: &str, operator: O, value: &str) -> Self
    where
        O: Into<Operator>,
    {
        Self {
            field: sanitize(field),
            operator: operator.into(),
            value: sanitize(value),
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn operator(&self) -> &Operator {
        &self.operator
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}` {} '{}'", self.field, self.operator, self.value)
    }
}
