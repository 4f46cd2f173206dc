//! One-shot row query command.

use clap::Args;

use wordsmith_core::config::AppConfig;
use wordsmith_core::error::AppError;
use wordsmith_core::traits::query::RowSource;
use wordsmith_core::types::catalog::ColumnSchema;
use wordsmith_core::types::filter::{Filter, FilterValue};
use wordsmith_core::types::sorting::SortKey;
use wordsmith_table::TableState;

use crate::output::{self, OutputFormat};

/// Arguments for the rows command
#[derive(Debug, Args)]
pub struct RowsArgs {
    /// Dataset name or UUID
    pub dataset: String,

    /// Page index (0-based)
    #[arg(short, long, default_value = "0")]
    pub page: u64,

    /// Rows per page
    #[arg(short, long)]
    pub limit: Option<u64>,

    /// Sort column
    #[arg(short, long)]
    pub sort: Option<String>,

    /// Sort descending instead of ascending
    #[arg(short = 'd', long)]
    pub desc: bool,

    /// Column condition such as "region=west" or "price>=100" (repeatable, AND-ed)
    #[arg(short = 'w', long = "where", value_name = "COND")]
    pub conditions: Vec<String>,

    /// Raw filter tree as JSON
    #[arg(long)]
    pub filter: Option<String>,
}

/// Execute the rows command
pub async fn execute(
    args: &RowsArgs,
    source: &dyn RowSource,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let dataset = super::resolve_dataset(source, &args.dataset).await?;
    let columns = source.schema(&dataset).await?;

    let filter = build_filter(&args.conditions, args.filter.as_deref())?;
    if let Some(filter) = &filter {
        validate_targets(filter, &columns)?;
    }

    let mut state = TableState::new(args.limit.unwrap_or(config.table.default_page_size));
    state.set_page(args.page);
    if let Some(column) = &args.sort {
        let key = if args.desc {
            SortKey::desc(column.clone())
        } else {
            SortKey::asc(column.clone())
        };
        state.set_sort(Some(key));
    }
    state.set_filter(filter);

    let response = source.query_rows(&dataset, &state.params()).await?;

    match format {
        OutputFormat::Table => {
            let names: Vec<String> = columns.iter().map(|c| c.name.clone()).collect();
            println!("{}", output::render_rows(&names, &response.data));
            output::print_page_line(&response.meta);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}

/// Reject filters that reference columns the dataset does not have.
///
/// The filter model itself is deliberately permissive; this boundary is
/// where targets are checked against the dataset schema.
pub fn validate_targets(filter: &Filter, columns: &[ColumnSchema]) -> Result<(), AppError> {
    let known: Vec<String> = columns.iter().map(|c| c.name.clone()).collect();
    let unknown = filter.unknown_targets(&known);
    if unknown.is_empty() {
        Ok(())
    } else {
        Err(AppError::validation(format!(
            "Unknown filter columns: {}",
            unknown.join(", ")
        )))
    }
}

/// Build the submitted filter from conditions and/or a raw JSON tree.
pub fn build_filter(conditions: &[String], json: Option<&str>) -> Result<Option<Filter>, AppError> {
    let mut operands = Vec::new();
    for condition in conditions {
        operands.push(parse_condition(condition)?);
    }
    if let Some(json) = json {
        let tree: Filter = serde_json::from_str(json)
            .map_err(|e| AppError::validation(format!("Invalid filter JSON: {e}")))?;
        operands.push(tree);
    }

    if operands.is_empty() {
        Ok(None)
    } else {
        Ok(Some(Filter::and(operands).shrink()))
    }
}

/// Parse one `column<op>value` condition.
pub fn parse_condition(input: &str) -> Result<Filter, AppError> {
    // Two-character operators first so "price>=100" is not read as ">".
    for op in ["<=", ">=", "!=", "=", "<", ">", "~"] {
        let Some(pos) = input.find(op) else {
            continue;
        };

        let target = input[..pos].trim();
        let raw = input[pos + op.len()..].trim();
        if target.is_empty() {
            return Err(AppError::validation(format!(
                "Missing column name in condition '{input}'"
            )));
        }

        let value = parse_value(raw);
        let filter = match op {
            "=" => Filter::equal_to(target, value),
            "!=" => Filter::not(Filter::equal_to(target, value)),
            "<" => Filter::less_than(target, value),
            "<=" => Filter::less_than_or_equal_to(target, value),
            ">" => Filter::greater_than(target, value),
            ">=" => Filter::greater_than_or_equal_to(target, value),
            "~" => Filter::has_text(target, raw),
            _ => return Err(AppError::validation(format!("Unsupported operator '{op}'"))),
        };
        return Ok(filter);
    }

    Err(AppError::validation(format!(
        "Cannot parse condition '{input}' (expected column=value, <, <=, >, >=, != or ~)"
    )))
}

fn parse_value(raw: &str) -> FilterValue {
    if raw == "null" {
        return FilterValue::Null;
    }
    if let Ok(b) = raw.parse::<bool>() {
        return FilterValue::Boolean(b);
    }
    if let Ok(i) = raw.parse::<i64>() {
        return FilterValue::Integer(i);
    }
    if let Ok(x) = raw.parse::<f64>() {
        return FilterValue::Float(x);
    }
    FilterValue::String(raw.trim_matches('"').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_equality() {
        let filter = parse_condition("region=west").expect("parse");
        assert_eq!(filter, Filter::equal_to("region", "west"));
    }

    #[test]
    fn test_parse_two_character_operators() {
        let filter = parse_condition("price>=100").expect("parse");
        assert_eq!(filter, Filter::greater_than_or_equal_to("price", 100i64));

        let filter = parse_condition("price<=2.5").expect("parse");
        assert_eq!(filter, Filter::less_than_or_equal_to("price", 2.5));

        let filter = parse_condition("region!=west").expect("parse");
        assert_eq!(filter, Filter::not(Filter::equal_to("region", "west")));
    }

    #[test]
    fn test_parse_has_text() {
        let filter = parse_condition("body~tax reform").expect("parse");
        assert_eq!(filter, Filter::has_text("body", "tax reform"));
    }

    #[test]
    fn test_parse_value_kinds() {
        assert_eq!(
            parse_condition("flag=true").expect("parse"),
            Filter::equal_to("flag", true)
        );
        assert_eq!(
            parse_condition("score=null").expect("parse"),
            Filter::EqualTo {
                target: "score".to_string(),
                value: FilterValue::Null,
            }
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_condition("no operator here").is_err());
        assert!(parse_condition("=west").is_err());
    }

    #[test]
    fn test_single_condition_is_not_wrapped() {
        let filter = build_filter(&["region=west".to_string()], None)
            .expect("build")
            .expect("some");
        assert_eq!(filter, Filter::equal_to("region", "west"));
    }

    #[test]
    fn test_multiple_conditions_are_anded() {
        let filter = build_filter(
            &["region=west".to_string(), "price>10".to_string()],
            None,
        )
        .expect("build")
        .expect("some");
        assert_eq!(
            filter,
            Filter::and(vec![
                Filter::equal_to("region", "west"),
                Filter::greater_than("price", 10i64),
            ])
        );
    }

    #[test]
    fn test_json_filter() {
        let json = r#"{"type": "empty", "target": "topic"}"#;
        let filter = build_filter(&[], Some(json)).expect("build").expect("some");
        assert_eq!(filter, Filter::empty("topic"));
        assert!(build_filter(&[], Some("not json")).is_err());
    }

    #[test]
    fn test_no_input_means_no_filter() {
        assert_eq!(build_filter(&[], None).expect("build"), None);
    }
}
