use sqlchain_error::Result;

use crate::{sanitize, Filter, Operator, Values};

/// Statement kind together with its payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Select(Vec<String>),
    Insert(Values),
    Update(Values),
    Delete,
}

/// DML statement in progress
///
/// A statement targets one table, holds at most one mode and at most one
/// filter. Choosing a mode replaces the previous mode and its payload, setting
/// a filter replaces the previous filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    table: String,
    mode: Option<Mode>,
    filter: Option<Filter>,
}

impl Statement {
    pub fn new(table: &str) -> Self {
        Self {
            table: sanitize(table),
            mode: None,
            filter: None,
        }
    }

    /// Retarget the statement
    pub fn table(mut self, name: &str) -> Self {
        self.table = sanitize(name);
        self
    }

    /// Select columns, an empty list selects `*`
    ///
    /// # Examples
    ///
    /// ```
    /// use sqlchain_query::Statement;
    ///
    /// let sql = Statement::new("users")
    ///     .select(["id", "name"])
    ///     .render()
    ///     .unwrap();
    ///
    /// assert_eq!(&sql, "SELECT id, name FROM `users`;");
    ///
    /// let sql = Statement::new("users")
    ///     .select(Vec::<&str>::new())
    ///     .render()
    ///     .unwrap();
    ///
    /// assert_eq!(&sql, "SELECT * FROM `users`;");
    /// ```
    pub fn select<T, S>(mut self, columns: T) -> Self
    where
        T: IntoIterator<Item = S>,
        S: ToString,
    {
        let mut columns = columns
            .into_iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>();
        if columns.is_empty() {
            columns.push("*".into());
        }

        self.mode = Some(Mode::Select(columns));
        self
    }

    /// Insert a row
    ///
    /// # Examples
    ///
    /// ```
    /// use sqlchain_query::Statement;
    ///
    /// let sql = Statement::new("users")
    ///     .insert([("name", "bob"), ("email", "bob@example.com")])
    ///     .render()
    ///     .unwrap();
    ///
    /// assert_eq!(&sql, "INSERT INTO `users` SET `name` = 'bob', `email` = 'bob@example.com';");
    /// ```
    pub fn insert<V: Into<Values>>(mut self, values: V) -> Self {
        self.mode = Some(Mode::Insert(values.into()));
        self
    }

    /// Update rows
    ///
    /// # Examples
    ///
    /// ```
    /// use sqlchain_query::Statement;
    ///
    /// let sql = Statement::new("users")
    ///     .update([("name", "alice")])
    ///     .find_by_id(3)
    ///     .render()
    ///     .unwrap();
    ///
    /// assert_eq!(&sql, "UPDATE `users` SET `name` = 'alice' WHERE `id` = '3';");
    /// ```
    pub fn update<V: Into<Values>>(mut self, values: V) -> Self {
        self.mode = Some(Mode::Update(values.into()));
        self
    }

    /// Delete rows
    ///
    /// Without a filter every row of the table is deleted.
    pub fn delete(mut self) -> Self {
        self.mode = Some(Mode::Delete);
        self
    }

    /// Set an equality filter
    pub fn filter<V: ToString>(self, field: &str, value: V) -> Self {
        self.filter_op(field, Operator::Eq, value)
    }

    /// Set a filter with an explicit operator
    ///
    /// # Examples
    ///
    /// ```
    /// use sqlchain_query::Statement;
    ///
    /// let sql = Statement::new("users")
    ///     .select(["name"])
    ///     .filter_op("age", ">=", 18)
    ///     .render()
    ///     .unwrap();
    ///
    /// assert_eq!(&sql, "SELECT name FROM `users` WHERE `age` >= '18';");
    /// ```
    pub fn filter_op<O, V>(mut self, field: &str, operator: O, value: V) -> Self
    where
        O: Into<Operator>,
        V: ToString,
    {
        self.filter = Some(Filter::new(field, operator, &value.to_string()));
        self
    }

    /// Shorthand for `filter("id", id)`
    pub fn find_by_id<V: ToString>(self, id: V) -> Self {
        self.filter("id", id)
    }

    pub fn table_name(&self) -> &str {
        &self.table
    }

    pub fn mode(&self) -> Option<&Mode> {
        self.mode.as_ref()
    }

    pub fn current_filter(&self) -> Option<&Filter> {
        self.filter.as_ref()
    }

    /// Render sql
    pub fn render(&self) -> Result<String> {
        // Validate statement
        let mode = self.validate()?;

        let mut parts = Vec::<String>::new();

        match mode {
            Mode::Select(columns) => {
                // Blank columns are dropped, nothing left selects `*`
                let mut columns = columns
                    .iter()
                    .map(|c| sanitize(c))
                    .filter(|c| !c.is_empty())
                    .collect::<Vec<_>>();
                if columns.is_empty() {
                    columns.push("*".into());
                }

                parts.push("SELECT".into());
                parts.push(columns.join(", "));
                parts.push("FROM".into());
                parts.push(format!("`{}`", self.table));
                self.push_filter(&mut parts);
            }
            Mode::Delete => {
                if self.filter.is_none() {
                    log::warn!("DELETE on `{}` without filter affects all rows", self.table);
                }

                parts.push("DELETE FROM".into());
                parts.push(format!("`{}`", self.table));
                self.push_filter(&mut parts);
            }
            Mode::Update(values) => {
                if self.filter.is_none() {
                    log::warn!("UPDATE on `{}` without filter affects all rows", self.table);
                }

                parts.push("UPDATE".into());
                parts.push(format!("`{}`", self.table));
                parts.push("SET".into());
                parts.push(render_assignments(values));
                self.push_filter(&mut parts);
            }
            Mode::Insert(values) => {
                parts.push("INSERT INTO".into());
                parts.push(format!("`{}`", self.table));
                parts.push("SET".into());
                parts.push(render_assignments(values));
            }
        }

        Ok(format!("{};", parts.join(" ")))
    }

    fn push_filter(&self, parts: &mut Vec<String>) {
        if let Some(filter) = &self.filter {
            parts.push("WHERE".into());
            parts.push(filter.to_string());
        }
    }

    /// Validate statement
    fn validate(&self) -> Result<&Mode> {
        if self.table.is_empty() {
            return Err(sqlchain_error::build!("Statement has no table"));
        }

        match &self.mode {
            None => Err(sqlchain_error::build!(
                "Statement on `{}` has no mode, call select, insert, update or delete first",
                self.table
            )),
            Some(Mode::Insert(values)) if values.is_empty() => Err(sqlchain_error::build!(
                "Insert into `{}` with empty values",
                self.table
            )),
            Some(Mode::Update(values)) if values.is_empty() => Err(sqlchain_error::build!(
                "Update `{}` with empty values",
                self.table
            )),
            Some(mode) => Ok(mode),
        }
    }
}

fn render_assignments(values: &Values) -> String {
    values
        .iter()
        .map(|(k, v)| format!("`{}` = '{}'", sanitize(k), sanitize(v)))
        .collect::<Vec<_>>()
        .join(", ")
}
