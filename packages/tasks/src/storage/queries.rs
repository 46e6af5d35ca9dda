// ABOUTME: SQL statement text shared by the SQLite and PostgreSQL stores
// ABOUTME: Rendered once per store with the backend's placeholder syntax

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// `?` placeholders
    Sqlite,
    /// `$1`, `$2`, ... placeholders
    Postgres,
}

impl Dialect {
    pub fn placeholder(self, index: usize) -> String {
        match self {
            Dialect::Sqlite => "?".to_string(),
            Dialect::Postgres => format!("${}", index),
        }
    }
}

const TASK_COLUMNS: &str = "id, title, active_at, done, created_at";

#[derive(Debug, Clone)]
pub struct Statements {
    pub insert: String,
    pub update: String,
    pub mark_done: String,
    pub delete: String,
    pub list_done: String,
    pub list_active: String,
}

impl Statements {
    pub fn new(dialect: Dialect) -> Self {
        let p = |index| dialect.placeholder(index);

        Self {
            insert: format!(
                "INSERT INTO tasks (id, title, active_at, done, created_at) VALUES ({}, {}, {}, FALSE, {})",
                p(1),
                p(2),
                p(3),
                p(4)
            ),
            update: format!(
                "UPDATE tasks SET title = {}, active_at = {} WHERE id = {}",
                p(1),
                p(2),
                p(3)
            ),
            mark_done: format!("UPDATE tasks SET done = TRUE WHERE id = {}", p(1)),
            delete: format!("DELETE FROM tasks WHERE id = {}", p(1)),
            list_done: format!(
                "SELECT {} FROM tasks WHERE done = TRUE ORDER BY created_at",
                TASK_COLUMNS
            ),
            list_active: format!(
                "SELECT {} FROM tasks WHERE done = FALSE AND active_at <= {} ORDER BY created_at",
                TASK_COLUMNS,
                p(1)
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_sqlite_placeholders() {
        let statements = Statements::new(Dialect::Sqlite);
        assert_eq!(
            statements.update,
            "UPDATE tasks SET title = ?, active_at = ? WHERE id = ?"
        );
        assert_eq!(statements.delete, "DELETE FROM tasks WHERE id = ?");
    }

    #[test]
    fn test_postgres_placeholders_are_numbered() {
        let statements = Statements::new(Dialect::Postgres);
        assert_eq!(
            statements.insert,
            "INSERT INTO tasks (id, title, active_at, done, created_at) VALUES ($1, $2, $3, FALSE, $4)"
        );
        assert_eq!(
            statements.update,
            "UPDATE tasks SET title = $1, active_at = $2 WHERE id = $3"
        );
        assert_eq!(statements.mark_done, "UPDATE tasks SET done = TRUE WHERE id = $1");
    }

    #[test]
    fn test_listing_statements_order_by_creation() {
        for dialect in [Dialect::Sqlite, Dialect::Postgres] {
            let statements = Statements::new(dialect);
            assert!(statements.list_done.ends_with("ORDER BY created_at"));
            assert!(statements.list_active.ends_with("ORDER BY created_at"));
            assert!(statements.list_active.contains("done = FALSE"));
        }
    }
}
