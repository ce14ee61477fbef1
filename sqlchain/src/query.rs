use crate::{
    builder::{ddl, Operator, Statement, Values},
    error::Result,
    Connection, QueryResult,
};

/// Single statement bound to a connection
///
/// Created by [`Database::table`](crate::Database::table), consumed by
/// [`Query::execute`], so a query value cannot leak state into the next
/// statement.
pub struct Query<'a> {
    conn: &'a Connection,
    table: String,
    stmt: Statement,
}

impl<'a> Query<'a> {
    pub fn new(conn: &'a Connection, table: &str) -> Self {
        Self {
            conn,
            table: table.into(),
            stmt: Statement::new(table),
        }
    }

    pub fn table(mut self, name: &str) -> Self {
        self.table = name.into();
        self.stmt = self.stmt.table(name);
        self
    }

    pub fn select<T, S>(mut self, columns: T) -> Self
    where
        T: IntoIterator<Item = S>,
        S: ToString,
    {
        self.stmt = self.stmt.select(columns);
        self
    }

    pub fn insert<V: Into<Values>>(mut self, values: V) -> Self {
        self.stmt = self.stmt.insert(values);
        self
    }

    pub fn update<V: Into<Values>>(mut self, values: V) -> Self {
        self.stmt = self.stmt.update(values);
        self
    }

    /// Delete rows, every row of the table if no filter is set
    pub fn delete(mut self) -> Self {
        self.stmt = self.stmt.delete();
        self
    }

    pub fn filter<V: ToString>(mut self, field: &str, value: V) -> Self {
        self.stmt = self.stmt.filter(field, value);
        self
    }

    pub fn filter_op<O, V>(mut self, field: &str, operator: O, value: V) -> Self
    where
        O: Into<Operator>,
        V: ToString,
    {
        self.stmt = self.stmt.filter_op(field, operator, value);
        self
    }

    pub fn find_by_id<V: ToString>(mut self, id: V) -> Self {
        self.stmt = self.stmt.find_by_id(id);
        self
    }

    pub fn statement(&self) -> &Statement {
        &self.stmt
    }

    pub fn render(&self) -> Result<String> {
        self.stmt.render()
    }

    /// Render and hand the statement to the connection
    pub async fn execute(self) -> Result<QueryResult> {
        let sql = self.render()?;
        self.conn.query(&sql).await
    }

    /// `ALTER TABLE ... ADD COLUMN` on the table of this query
    pub async fn add_column(self, column: &str, ty: &str) -> Result<QueryResult> {
        let sql = ddl::add_column(&self.table, column, ty);
        log::debug!("Add column: {}", sql);
        self.conn.query(&sql).await
    }
}
