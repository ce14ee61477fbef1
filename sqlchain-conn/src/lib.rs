mod connection;
mod drivers;
mod options;
mod value;

pub use connection::Connection;
pub use options::ConnectOptions;
pub use value::{FromValue, Value};

#[cfg(feature = "mysql")]
pub use drivers::mysql::MysqlPoolProxy;

pub mod driver {
    #[cfg(feature = "mysql")]
    pub use mysql_lib as mysql;
}

use sqlchain_error::Result;

/// Execution collaborator
///
/// Receives rendered statement text unchanged and reports rows or the
/// affected row count. Errors are returned as is, no retry is performed.
#[async_trait::async_trait]
pub trait Driver: Sync + Send {
    async fn query(&self, sql: &str) -> Result<QueryResult>;
    async fn prepare(&self, sql: &str) -> Result<PreparedStatement>;
}

/// Result of a single statement
#[derive(Debug, Clone, PartialEq)]
pub enum QueryResult {
    /// Result set of a read
    Rows(Vec<Row>),
    /// Outcome of a write
    Affected {
        rows: u64,
        last_insert_id: Option<u64>,
    },
}

impl QueryResult {
    /// Rows of a read, empty for writes
    pub fn rows(&self) -> &[Row] {
        match self {
            Self::Rows(rows) => rows,
            Self::Affected { .. } => &[],
        }
    }

    pub fn into_rows(self) -> Vec<Row> {
        match self {
            Self::Rows(rows) => rows,
            Self::Affected { .. } => vec![],
        }
    }

    /// Affected row count of a write, 0 for reads
    pub fn affected_rows(&self) -> u64 {
        match self {
            Self::Rows(_) => 0,
            Self::Affected { rows, .. } => *rows,
        }
    }

    pub fn last_insert_id(&self) -> Option<u64> {
        match self {
            Self::Rows(_) => None,
            Self::Affected { last_insert_id, .. } => *last_insert_id,
        }
    }
}

/// Ordered column values of one result row
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    columns: Vec<String>,
    values: Vec<Value>,
}

impl Row {
    pub fn new(columns: Vec<String>, values: Vec<Value>) -> Self {
        Self { columns, values }
    }

    pub fn get<T: FromValue>(&self, column: &str) -> Result<<T as FromValue>::Output> {
        if let Some(index) = self.columns.iter().position(|c| c == column) {
            self.get_index::<T>(index)
        } else {
            Err(sqlchain_error::out_of_range!(
                "Column `{}` not found, columns: {:?}",
                column,
                self.columns
            ))
        }
    }

    pub fn get_index<T: FromValue>(&self, index: usize) -> Result<<T as FromValue>::Output> {
        if let Some(v) = self.values.get(index) {
            Ok(T::from_value(v)?)
        } else {
            Err(sqlchain_error::out_of_range!(
                "Index out of range: index: {}, values length: {}",
                index,
                self.values.len()
            ))
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Server side prepared statement metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedStatement {
    pub sql: String,
    pub id: u32,
    pub params: u16,
    pub columns: Vec<String>,
}
