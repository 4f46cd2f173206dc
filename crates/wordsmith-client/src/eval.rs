//! Filter evaluation over in-memory rows.
//!
//! Only the in-memory row source evaluates filter trees; it plays the
//! role of the remote server. The filter model itself never evaluates.

use std::cmp::Ordering;

use serde_json::Value;

use wordsmith_core::types::catalog::Row;
use wordsmith_core::types::filter::{Filter, FilterValue};

/// Whether a row satisfies the filter tree.
pub(crate) fn matches(filter: &Filter, row: &Row) -> bool {
    match filter {
        Filter::And { operands } => operands.iter().all(|f| matches(f, row)),
        Filter::Or { operands } => operands.iter().any(|f| matches(f, row)),
        Filter::Not { operand } => !matches(operand, row),
        Filter::EqualTo { target, value } => {
            row.get(target).is_some_and(|cell| value_eq(cell, value))
        }
        Filter::LessThan { target, value } => {
            compare(row.get(target), value) == Some(Ordering::Less)
        }
        Filter::LessThanOrEqualTo { target, value } => matches!(
            compare(row.get(target), value),
            Some(Ordering::Less | Ordering::Equal)
        ),
        Filter::GreaterThan { target, value } => {
            compare(row.get(target), value) == Some(Ordering::Greater)
        }
        Filter::GreaterThanOrEqualTo { target, value } => matches!(
            compare(row.get(target), value),
            Some(Ordering::Greater | Ordering::Equal)
        ),
        Filter::HasText { target, value } => row
            .get(target)
            .and_then(Value::as_str)
            .is_some_and(|text| text.to_lowercase().contains(&value.to_lowercase())),
        Filter::IsOneOf { target, values } => row
            .get(target)
            .is_some_and(|cell| values.iter().any(|v| value_eq(cell, v))),
        Filter::Includes { target, value } => includes(row.get(target), value),
        Filter::Excludes { target, value } => !includes(row.get(target), value),
        Filter::Only { target, value } => match row.get(target) {
            Some(Value::Array(items)) => {
                !items.is_empty() && items.iter().all(|item| value_eq(item, value))
            }
            Some(cell) => value_eq(cell, value),
            None => false,
        },
        Filter::Empty { target } => is_empty(row.get(target)),
        Filter::NotEmpty { target } => !is_empty(row.get(target)),
    }
}

/// Total order over cells of one column, for sorting.
///
/// Numbers sort before strings, strings before booleans; empty cells
/// always sort last.
pub(crate) fn compare_cells(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    fn rank(value: Option<&Value>) -> u8 {
        match value {
            Some(Value::Number(_)) => 0,
            Some(Value::String(_)) => 1,
            Some(Value::Bool(_)) => 2,
            Some(Value::Array(_)) | Some(Value::Object(_)) => 3,
            Some(Value::Null) | None => 4,
        }
    }

    match (a, b) {
        (Some(Value::Number(x)), Some(Value::Number(y))) => x
            .as_f64()
            .partial_cmp(&y.as_f64())
            .unwrap_or(Ordering::Equal),
        (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
        (Some(Value::Bool(x)), Some(Value::Bool(y))) => x.cmp(y),
        _ => rank(a).cmp(&rank(b)),
    }
}

fn value_eq(cell: &Value, literal: &FilterValue) -> bool {
    match (cell, literal) {
        (Value::String(s), FilterValue::String(t)) => s == t,
        (Value::Bool(b), FilterValue::Boolean(t)) => b == t,
        (Value::Null, FilterValue::Null) => true,
        (Value::Number(n), _) => match (n.as_f64(), literal_number(literal)) {
            (Some(x), Some(y)) => x == y,
            _ => false,
        },
        _ => false,
    }
}

fn compare(cell: Option<&Value>, literal: &FilterValue) -> Option<Ordering> {
    match (cell?, literal) {
        (Value::String(s), FilterValue::String(t)) => Some(s.as_str().cmp(t.as_str())),
        (Value::Number(n), _) => n.as_f64()?.partial_cmp(&literal_number(literal)?),
        _ => None,
    }
}

fn includes(cell: Option<&Value>, literal: &FilterValue) -> bool {
    match cell {
        Some(Value::Array(items)) => items.iter().any(|item| value_eq(item, literal)),
        _ => false,
    }
}

fn is_empty(cell: Option<&Value>) -> bool {
    match cell {
        None => true,
        Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Array(items)) => items.is_empty(),
        _ => false,
    }
}

fn literal_number(literal: &FilterValue) -> Option<f64> {
    match literal {
        FilterValue::Integer(i) => Some(*i as f64),
        FilterValue::Float(x) => Some(*x),
        _ => None,
    }
}
