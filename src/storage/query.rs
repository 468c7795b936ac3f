use rusqlite::types::Value;

use crate::types::UserFilter;

/// Column list in the positional order `map_user_row` reads.
pub const USER_COLUMNS: &str = "id, name, birthdate, phone, category, comment, last_modified";

/// A search statement whose predicates and bound values are built together,
/// so the n-th `?` always pairs with the n-th value.
#[derive(Debug, Default)]
pub struct SearchQuery {
    clauses: Vec<&'static str>,
    params: Vec<Value>,
}

impl SearchQuery {
    pub fn from_filter(filter: &UserFilter) -> Self {
        let mut query = Self::default();
        if let Some(name) = &filter.name {
            query.push(r"name LIKE ? ESCAPE '\'", Value::Text(like_contains(name)));
        }
        if let Some(year) = &filter.birth_year {
            query.push(
                r"strftime('%Y', birthdate) LIKE ? ESCAPE '\'",
                Value::Text(like_contains(year)),
            );
        }
        if let Some(category) = filter.category {
            query.push("category = ?", Value::Integer(i64::from(category)));
        }
        query
    }

    fn push(&mut self, clause: &'static str, value: Value) {
        self.clauses.push(clause);
        self.params.push(value);
    }

    pub fn sql(&self) -> String {
        let mut sql = format!("SELECT {USER_COLUMNS} FROM users");
        if !self.clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&self.clauses.join(" AND "));
        }
        sql.push_str(" ORDER BY id LIMIT 1");
        sql
    }

    pub fn params(&self) -> &[Value] {
        &self.params
    }
}

fn like_contains(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for c in needle.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filter_selects_everything() {
        let query = SearchQuery::from_filter(&UserFilter::new());
        assert_eq!(
            query.sql(),
            "SELECT id, name, birthdate, phone, category, comment, last_modified FROM users ORDER BY id LIMIT 1"
        );
        assert!(query.params().is_empty());
    }

    #[test]
    fn name_only_binds_one_parameter() {
        let query = SearchQuery::from_filter(&UserFilter::new().with_name("Tanaka"));
        assert!(query.sql().contains(r"WHERE name LIKE ? ESCAPE '\' ORDER BY"));
        assert_eq!(query.params(), &[Value::Text("%Tanaka%".into())]);
    }

    #[test]
    fn year_and_category_skip_the_name_slot() {
        let filter = UserFilter::new().with_birth_year("1990").with_category(3);
        let query = SearchQuery::from_filter(&filter);
        let sql = query.sql();
        assert!(!sql.contains("name LIKE"));
        assert!(sql.contains(r"WHERE strftime('%Y', birthdate) LIKE ? ESCAPE '\' AND category = ?"));
        assert_eq!(
            query.params(),
            &[Value::Text("%1990%".into()), Value::Integer(3)]
        );
    }

    #[test]
    fn all_predicates_keep_fixed_order() {
        let filter = UserFilter::new()
            .with_category(0)
            .with_birth_year("19")
            .with_name("Aoi");
        let query = SearchQuery::from_filter(&filter);
        let sql = query.sql();
        let name_at = sql.find("name LIKE").unwrap();
        let year_at = sql.find("strftime").unwrap();
        let category_at = sql.find("category = ?").unwrap();
        assert!(name_at < year_at && year_at < category_at);
        assert_eq!(sql.matches('?').count(), query.params().len());
        assert_eq!(query.params()[2], Value::Integer(0));
    }

    #[test]
    fn like_metacharacters_are_escaped() {
        assert_eq!(like_contains("100%_a\\b"), r"%100\%\_a\\b%");
    }
}
