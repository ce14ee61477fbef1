//! # DDL
//!
//! Renderers for `CREATE TABLE`, `ALTER TABLE`, `DROP TABLE` and
//! `SHOW TABLES`. Every identifier passes through [`sanitize`].

use sqlchain_error::Result;

use crate::{sanitize, Schema};

pub const SHOW_TABLES: &str = "SHOW TABLES;";

/// Render `CREATE TABLE` from a populate callback
///
/// # Examples
///
/// ```
/// use sqlchain_query::ddl;
///
/// let sql = ddl::create_table("users", |t| {
///     t.id();
///     t.varchar_with("name", 50);
/// })
/// .unwrap();
///
/// assert_eq!(
///     &sql,
///     "CREATE TABLE IF NOT EXISTS `users` (`id` BIGINT(16), PRIMARY KEY (`id`), `name` VARCHAR(50)) DEFAULT CHARSET=utf8mb4;"
/// );
/// ```
pub fn create_table<F>(name: &str, populate: F) -> Result<String>
where
    F: FnOnce(&mut Schema),
{
    let name = sanitize(name);

    let mut schema = Schema::new();
    populate(&mut schema);

    create_table_from(&name, &schema)
}

/// Render `CREATE TABLE` from an already populated schema
pub fn create_table_from(name: &str, schema: &Schema) -> Result<String> {
    if schema.is_empty() {
        return Err(sqlchain_error::build!(
            "Create table `{}` without columns",
            name
        ));
    }

    Ok(format!(
        "CREATE TABLE IF NOT EXISTS `{name}` ({cols}) DEFAULT CHARSET=utf8mb4;",
        name = name,
        cols = schema.fragment()
    ))
}

/// Render `ALTER TABLE ... ADD COLUMN` for one column
///
/// # Examples
///
/// ```
/// use sqlchain_query::ddl;
///
/// let sql = ddl::add_column("users", "age", "INT(3)");
///
/// assert_eq!(&sql, "ALTER TABLE `users` ADD COLUMN `age` INT(3);");
/// ```
pub fn add_column(table: &str, column: &str, ty: &str) -> String {
    format!(
        "ALTER TABLE `{}` {};",
        sanitize(table),
        add_column_clause(column, ty)
    )
}

/// Render `ALTER TABLE ... ADD COLUMN` for several columns, in order
///
/// # Examples
///
/// ```
/// use sqlchain_query::ddl;
///
/// let sql = ddl::add_columns("users", [("age", "INT(3)"), ("bio", "TEXT")]).unwrap();
///
/// assert_eq!(&sql, "ALTER TABLE `users` ADD COLUMN `age` INT(3), ADD COLUMN `bio` TEXT;");
/// ```
pub fn add_columns<T, K, V>(table: &str, columns: T) -> Result<String>
where
    T: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let clauses = columns
        .into_iter()
        .map(|(col, ty)| add_column_clause(col.as_ref(), ty.as_ref()))
        .collect::<Vec<_>>();

    if clauses.is_empty() {
        return Err(sqlchain_error::empty_argument!(
            "Columns of `{}` must not be empty",
            table
        ));
    }

    Ok(format!(
        "ALTER TABLE `{}` {};",
        sanitize(table),
        clauses.join(", ")
    ))
}

fn add_column_clause(column: &str, ty: &str) -> String {
    format!("ADD COLUMN `{}` {}", sanitize(column), sanitize(ty))
}

pub fn drop_table(name: &str) -> String {
    format!("DROP TABLE `{}`;", sanitize(name))
}

/// Render `DROP TABLE` for several tables
///
/// # Examples
///
/// ```
/// use sqlchain_query::ddl;
///
/// assert_eq!(&ddl::drop_tables(["a", "b"]).unwrap(), "DROP TABLE a, b;");
/// assert!(ddl::drop_tables(Vec::<&str>::new()).is_err());
/// ```
pub fn drop_tables<T, S>(names: T) -> Result<String>
where
    T: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let names = names
        .into_iter()
        .map(|n| sanitize(n.as_ref()))
        .collect::<Vec<_>>();

    if names.is_empty() {
        return Err(sqlchain_error::empty_argument!("Tables must not be empty"));
    }

    Ok(format!("DROP TABLE {};", names.join(", ")))
}

#[cfg(test)]
mod test {
    use sqlchain_error::Error;

    use super::*;

    #[test]
    fn test_create_table() {
        let sql = create_table(" posts ", |t| {
            t.id();
            t.integer("user_id");
            t.medium_text("body");
            t.date_time("created_at");
        })
        .unwrap();

        assert_eq!(
            &sql,
            "CREATE TABLE IF NOT EXISTS `posts` (`id` BIGINT(16), PRIMARY KEY (`id`), \
             `user_id` INT(11), `body` MEDIUMTEXT, `created_at` DATETIME) DEFAULT CHARSET=utf8mb4;"
        );
    }

    #[test]
    fn test_create_table_without_columns() {
        let res = create_table("empty", |_| {});
        assert!(matches!(res, Err(Error::Build(_))));
    }

    #[test]
    fn test_add_columns_empty() {
        let res = add_columns("users", Vec::<(String, String)>::new());
        assert!(matches!(res, Err(Error::EmptyArgument(_))));
    }

    #[test]
    fn test_drop_table() {
        assert_eq!(&drop_table(" users "), "DROP TABLE `users`;");
    }

    #[test]
    fn test_drop_tables() {
        assert_eq!(
            &drop_tables(vec!["users".to_string(), " posts".to_string()]).unwrap(),
            "DROP TABLE users, posts;"
        );

        let res = drop_tables(Vec::<String>::new());
        assert!(matches!(res, Err(Error::EmptyArgument(_))));
    }
}
