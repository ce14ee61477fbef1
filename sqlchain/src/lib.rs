mod database;
mod query;

pub use async_trait::async_trait;
pub use sqlchain_conn as conn;
pub use sqlchain_error as error;
pub use sqlchain_query as builder;

pub use conn::{
    ConnectOptions, Connection, Driver, FromValue, PreparedStatement, QueryResult, Row, Value,
};
pub use builder::{sanitize, Operator, Schema, Statement, Values};
pub use database::Database;
pub use query::Query;
