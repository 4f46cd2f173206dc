//! Boolean filter trees for dataset list queries.
//!
//! A [`Filter`] describes which rows a list query should return. Trees are
//! built by the UI boundary, serialized verbatim into request bodies, and
//! evaluated only by the remote collaborator. Edits never mutate a tree in
//! place; they build a new one.

use serde::{Deserialize, Serialize};

/// A literal operand in a leaf predicate.
///
/// Untagged on the wire: `"west"`, `42`, `1.5`, `true`, `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    /// A string value.
    String(String),
    /// An integer value.
    Integer(i64),
    /// A floating-point value.
    Float(f64),
    /// A boolean value.
    Boolean(bool),
    /// Null / no value.
    Null,
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i64> for FilterValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for FilterValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for FilterValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl std::fmt::Display for FilterValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::String(s) => write!(f, "{s}"),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Null => write!(f, "null"),
        }
    }
}

/// One node of the boolean predicate tree sent to the remote collaborator.
///
/// The `type` discriminator and field names are the wire format of the
/// Wordsmith list-query API and must not change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Filter {
    /// All operands must match.
    And {
        /// Ordered child predicates.
        operands: Vec<Filter>,
    },
    /// At least one operand must match.
    Or {
        /// Ordered child predicates.
        operands: Vec<Filter>,
    },
    /// The child predicate must not match.
    Not {
        /// The single negated child.
        operand: Box<Filter>,
    },
    /// The cell equals the value.
    EqualTo {
        /// Column name.
        target: String,
        /// Comparison literal.
        value: FilterValue,
    },
    /// The cell is strictly less than the value.
    LessThan {
        /// Column name.
        target: String,
        /// Comparison literal.
        value: FilterValue,
    },
    /// The cell is less than or equal to the value.
    LessThanOrEqualTo {
        /// Column name.
        target: String,
        /// Comparison literal.
        value: FilterValue,
    },
    /// The cell is strictly greater than the value.
    GreaterThan {
        /// Column name.
        target: String,
        /// Comparison literal.
        value: FilterValue,
    },
    /// The cell is greater than or equal to the value.
    GreaterThanOrEqualTo {
        /// Column name.
        target: String,
        /// Comparison literal.
        value: FilterValue,
    },
    /// The cell contains the text (case-insensitive).
    HasText {
        /// Column name.
        target: String,
        /// Search text.
        value: String,
    },
    /// The cell equals one of the values.
    IsOneOf {
        /// Column name.
        target: String,
        /// Allowed literals.
        values: Vec<FilterValue>,
    },
    /// A list-valued cell contains the value.
    Includes {
        /// Column name.
        target: String,
        /// Required member.
        value: FilterValue,
    },
    /// A list-valued cell does not contain the value.
    Excludes {
        /// Column name.
        target: String,
        /// Forbidden member.
        value: FilterValue,
    },
    /// A list-valued cell contains the value and nothing else.
    Only {
        /// Column name.
        target: String,
        /// The single allowed member.
        value: FilterValue,
    },
    /// The cell is empty (null, empty string, or empty list).
    Empty {
        /// Column name.
        target: String,
    },
    /// The cell is not empty.
    NotEmpty {
        /// Column name.
        target: String,
    },
}

impl Filter {
    /// Conjunction of the given predicates.
    pub fn and(operands: Vec<Filter>) -> Self {
        Self::And { operands }
    }

    /// Disjunction of the given predicates.
    pub fn or(operands: Vec<Filter>) -> Self {
        Self::Or { operands }
    }

    /// Negation of the given predicate.
    pub fn not(operand: Filter) -> Self {
        Self::Not {
            operand: Box::new(operand),
        }
    }

    /// Shorthand for an equality predicate.
    pub fn equal_to(target: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        Self::EqualTo {
            target: target.into(),
            value: value.into(),
        }
    }

    /// Shorthand for a strict less-than predicate.
    pub fn less_than(target: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        Self::LessThan {
            target: target.into(),
            value: value.into(),
        }
    }

    /// Shorthand for a less-than-or-equal predicate.
    pub fn less_than_or_equal_to(target: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        Self::LessThanOrEqualTo {
            target: target.into(),
            value: value.into(),
        }
    }

    /// Shorthand for a strict greater-than predicate.
    pub fn greater_than(target: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        Self::GreaterThan {
            target: target.into(),
            value: value.into(),
        }
    }

    /// Shorthand for a greater-than-or-equal predicate.
    pub fn greater_than_or_equal_to(
        target: impl Into<String>,
        value: impl Into<FilterValue>,
    ) -> Self {
        Self::GreaterThanOrEqualTo {
            target: target.into(),
            value: value.into(),
        }
    }

    /// Shorthand for a case-insensitive text-search predicate.
    pub fn has_text(target: impl Into<String>, value: impl Into<String>) -> Self {
        Self::HasText {
            target: target.into(),
            value: value.into(),
        }
    }

    /// Shorthand for a membership predicate.
    pub fn is_one_of(target: impl Into<String>, values: Vec<FilterValue>) -> Self {
        Self::IsOneOf {
            target: target.into(),
            values,
        }
    }

    /// Shorthand for a list-contains predicate.
    pub fn includes(target: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        Self::Includes {
            target: target.into(),
            value: value.into(),
        }
    }

    /// Shorthand for a list-does-not-contain predicate.
    pub fn excludes(target: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        Self::Excludes {
            target: target.into(),
            value: value.into(),
        }
    }

    /// Shorthand for an only-member predicate.
    pub fn only(target: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        Self::Only {
            target: target.into(),
            value: value.into(),
        }
    }

    /// Shorthand for an is-empty predicate.
    pub fn empty(target: impl Into<String>) -> Self {
        Self::Empty {
            target: target.into(),
        }
    }

    /// Shorthand for an is-not-empty predicate.
    pub fn not_empty(target: impl Into<String>) -> Self {
        Self::NotEmpty {
            target: target.into(),
        }
    }

    /// Collapse a redundant single-operand `and`/`or` wrapper.
    ///
    /// Applied repeatedly at the top level until the node is no longer a
    /// single-operand composite, so the result is a fixed point:
    /// `shrink(shrink(node)) == shrink(node)`. Does not descend into
    /// children; use [`Filter::normalize`] for deep collapsing.
    pub fn shrink(self) -> Filter {
        let mut node = self;
        loop {
            node = match node {
                Filter::And { mut operands } | Filter::Or { mut operands }
                    if operands.len() == 1 =>
                {
                    operands.swap_remove(0)
                }
                done => return done,
            };
        }
    }

    /// Collapse redundant single-operand `and`/`or` wrappers at every depth.
    ///
    /// This is what the table coordinator applies before submitting a
    /// filter to the remote collaborator.
    pub fn normalize(self) -> Filter {
        match self {
            Filter::And { operands } => Filter::And {
                operands: operands.into_iter().map(Filter::normalize).collect(),
            }
            .shrink(),
            Filter::Or { operands } => Filter::Or {
                operands: operands.into_iter().map(Filter::normalize).collect(),
            }
            .shrink(),
            Filter::Not { operand } => Filter::Not {
                operand: Box::new(operand.normalize()),
            },
            leaf => leaf,
        }
    }

    /// Collect every leaf `target` in the tree, in depth-first order.
    pub fn targets(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_targets(&mut out);
        out
    }

    /// Return the leaf targets that do not name one of the known columns.
    ///
    /// The model itself never rejects a tree; this supports the UI
    /// boundary, which validates targets against the dataset schema
    /// before submission.
    pub fn unknown_targets(&self, known: &[String]) -> Vec<String> {
        self.targets()
            .into_iter()
            .filter(|t| !known.iter().any(|k| k.as_str() == *t))
            .map(str::to_string)
            .collect()
    }

    fn collect_targets<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Filter::And { operands } | Filter::Or { operands } => {
                for operand in operands {
                    operand.collect_targets(out);
                }
            }
            Filter::Not { operand } => operand.collect_targets(out),
            Filter::EqualTo { target, .. }
            | Filter::LessThan { target, .. }
            | Filter::LessThanOrEqualTo { target, .. }
            | Filter::GreaterThan { target, .. }
            | Filter::GreaterThanOrEqualTo { target, .. }
            | Filter::HasText { target, .. }
            | Filter::IsOneOf { target, .. }
            | Filter::Includes { target, .. }
            | Filter::Excludes { target, .. }
            | Filter::Only { target, .. }
            | Filter::Empty { target }
            | Filter::NotEmpty { target } => out.push(target),
        }
    }
}
