use regex::Regex;
use std::sync::OnceLock;

/// Pulls entity/field/value triples out of PostgreSQL constraint violations.
///
/// Constraint names follow the PostgreSQL defaults used by the migrations:
/// `<table>_<column>_key`, `<table>_<column>_fkey` and `<table>_<column>_check`.
pub struct ConstraintParser;

struct RegexPatterns {
    key_value: Regex,
    column_name: Regex,
    table_name: Regex,
}

static REGEX_PATTERNS: OnceLock<RegexPatterns> = OnceLock::new();

const SUFFIXES: [&str; 4] = ["_key", "_fkey", "_check", "_idx"];

impl ConstraintParser {
    fn patterns() -> &'static RegexPatterns {
        REGEX_PATTERNS.get_or_init(|| RegexPatterns {
            key_value: Regex::new(r"Key \(([^)]+)\)=\(([^)]*)\)").expect("static regex"),
            column_name: Regex::new(r#"column "([^"]+)""#).expect("static regex"),
            table_name: Regex::new(r#"(?:table|relation) "([^"]+)""#).expect("static regex"),
        })
    }

    /// Returns `(entity, field, value)` for a unique violation.
    pub fn parse_unique_violation(
        message: &str,
        constraint_name: Option<&str>,
    ) -> Option<(String, String, String)> {
        if let Some((entity, field)) = constraint_name.and_then(Self::parse_constraint_name) {
            let value = Self::extract_key_value_from_message(message)
                .map(|(_, v)| v)
                .unwrap_or_else(|| "duplicate_value".to_string());
            return Some((entity, field, value));
        }

        let (field, value) = Self::extract_key_value_from_message(message)?;
        let entity =
            Self::extract_table_from_message(message).unwrap_or_else(|| "resource".to_string());
        Some((entity, field, value))
    }

    /// Returns `(entity, field)` for a not-null violation.
    pub fn parse_not_null_violation(
        message: &str,
        constraint_name: Option<&str>,
    ) -> Option<(String, String)> {
        let field = Self::extract_column_from_message(message)?;
        let entity = Self::extract_table_from_message(message)
            .or_else(|| constraint_name.and_then(Self::parse_constraint_name).map(|(e, _)| e))
            .unwrap_or_else(|| "resource".to_string());
        Some((entity, field))
    }

    /// Returns `(entity, field, referenced_value)` for a foreign key violation.
    pub fn parse_foreign_key_violation(
        message: &str,
        constraint_name: Option<&str>,
    ) -> Option<(String, String, String)> {
        if let Some((entity, field)) = constraint_name.and_then(Self::parse_constraint_name) {
            let value = Self::extract_key_value_from_message(message)
                .map(|(_, v)| v)
                .unwrap_or_else(|| "invalid_reference".to_string());
            return Some((entity, field, value));
        }

        let (field, value) = Self::extract_key_value_from_message(message)?;
        let entity =
            Self::extract_table_from_message(message).unwrap_or_else(|| "resource".to_string());
        Some((entity, field, value))
    }

    /// Returns `(entity, field)` for a check violation.
    pub fn parse_check_violation(
        message: &str,
        constraint_name: Option<&str>,
    ) -> Option<(String, String)> {
        if let Some(parsed) = constraint_name.and_then(Self::parse_constraint_name) {
            return Some(parsed);
        }
        let field = Self::extract_column_from_message(message)?;
        let entity =
            Self::extract_table_from_message(message).unwrap_or_else(|| "resource".to_string());
        Some((entity, field))
    }

    /// Splits `jobs_job_number_key` into `("jobs", "job_number")`.
    ///
    /// Table names in this schema never contain underscores, so everything
    /// between the first underscore and the suffix is the column.
    pub fn parse_constraint_name(constraint_name: &str) -> Option<(String, String)> {
        let stem = SUFFIXES
            .iter()
            .find_map(|suffix| constraint_name.strip_suffix(suffix))?;
        let (entity, field) = stem.split_once('_')?;
        if entity.is_empty() || field.is_empty() {
            return None;
        }
        Some((entity.to_string(), field.to_string()))
    }

    pub fn extract_column_from_message(message: &str) -> Option<String> {
        Self::patterns()
            .column_name
            .captures(message)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }

    pub fn extract_table_from_message(message: &str) -> Option<String> {
        Self::patterns()
            .table_name
            .captures(message)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }

    /// Matches the `Key (field)=(value)` detail line.
    pub fn extract_key_value_from_message(message: &str) -> Option<(String, String)> {
        Self::patterns().key_value.captures(message).and_then(|caps| {
            let field = caps.get(1)?.as_str().to_string();
            let value = caps.get(2)?.as_str().to_string();
            Some((field, value))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_constraint_name_keeps_multi_word_columns() {
        assert_eq!(
            ConstraintParser::parse_constraint_name("jobs_job_number_key"),
            Some(("jobs".to_string(), "job_number".to_string()))
        );
        assert_eq!(
            ConstraintParser::parse_constraint_name("jobs_customer_id_fkey"),
            Some(("jobs".to_string(), "customer_id".to_string()))
        );
        assert_eq!(
            ConstraintParser::parse_constraint_name("leads_urgency_check"),
            Some(("leads".to_string(), "urgency".to_string()))
        );
        assert_eq!(ConstraintParser::parse_constraint_name("users_pkey"), None);
        assert_eq!(ConstraintParser::parse_constraint_name("nonsense"), None);
    }

    #[test]
    fn test_unique_violation_from_message_only() {
        let message = "duplicate key value violates unique constraint\nDETAIL: Key (email)=(a@b.co) already exists.";
        assert_eq!(
            ConstraintParser::parse_unique_violation(message, None),
            Some((
                "resource".to_string(),
                "email".to_string(),
                "a@b.co".to_string()
            ))
        );
    }

    #[test]
    fn test_not_null_reads_relation() {
        let message =
            "null value in column \"phone\" of relation \"leads\" violates not-null constraint";
        assert_eq!(
            ConstraintParser::parse_not_null_violation(message, None),
            Some(("leads".to_string(), "phone".to_string()))
        );
    }
}
