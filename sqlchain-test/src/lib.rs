use std::{
    collections::VecDeque,
    future::Future,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use sqlchain::{
    error::{Error, Result},
    Connection, Database, Driver, PreparedStatement, QueryResult, Row, Value,
};

/// Driver that records every statement and replays queued responses
///
/// Statements without a queued response succeed with zero affected rows.
#[derive(Clone, Default)]
pub struct RecordingDriver {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    statements: Vec<String>,
    prepared: Vec<String>,
    responses: VecDeque<Result<QueryResult>>,
}

impl RecordingDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the result of the next statement
    pub fn respond(&self, res: QueryResult) -> &Self {
        self.lock().responses.push_back(Ok(res));
        self
    }

    /// Queue single column rows, like `SHOW TABLES` returns
    pub fn respond_rows(&self, column: &str, values: &[&str]) -> &Self {
        let rows = values
            .iter()
            .map(|v| Row::new(vec![column.into()], vec![Value::Bytes(v.as_bytes().to_vec())]))
            .collect();
        self.respond(QueryResult::Rows(rows))
    }

    /// Queue a failure of the next statement
    pub fn fail(&self, err: Error) -> &Self {
        self.lock().responses.push_back(Err(err));
        self
    }

    pub fn statements(&self) -> Vec<String> {
        self.lock().statements.clone()
    }

    pub fn prepared(&self) -> Vec<String> {
        self.lock().prepared.clone()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[sqlchain::async_trait]
impl Driver for RecordingDriver {
    async fn query(&self, sql: &str) -> Result<QueryResult> {
        let mut inner = self.lock();
        inner.statements.push(sql.into());

        inner.responses.pop_front().unwrap_or(Ok(QueryResult::Affected {
            rows: 0,
            last_insert_id: None,
        }))
    }

    async fn prepare(&self, sql: &str) -> Result<PreparedStatement> {
        let mut inner = self.lock();
        inner.prepared.push(sql.into());

        Ok(PreparedStatement {
            sql: sql.into(),
            id: inner.prepared.len() as u32,
            params: sql.matches('?').count() as u16,
            columns: vec![],
        })
    }
}

pub fn init_logger() {
    env_logger::builder().is_test(true).try_init().ok();
}

pub async fn run_test<Fun, Fut>(f: Fun)
where
    Fun: FnOnce(Database, RecordingDriver) -> Fut,
    Fut: Future<Output = ()>,
{
    init_logger();

    let driver = RecordingDriver::new();
    let db = Database::new(Connection::new(driver.clone()));

    f(db, driver).await;
}
