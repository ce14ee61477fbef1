use std::time::Duration;

use mysql_lib::prelude::Queryable;
use sqlchain_error::Result;
use tokio::task::spawn_blocking;

use crate::{ConnectOptions, Driver, PreparedStatement, QueryResult, Row, Value};

/// Mysql connection pool, statements run on the tokio blocking pool
pub struct MysqlPoolProxy {
    pool: mysql_lib::Pool,
    acquire_timeout: Option<Duration>,
}

impl MysqlPoolProxy {
    pub fn new(pool: mysql_lib::Pool, acquire_timeout: Option<Duration>) -> Self {
        Self {
            pool,
            acquire_timeout,
        }
    }

    pub async fn connect(opts: &ConnectOptions) -> Result<Self> {
        let mut builder = mysql_lib::OptsBuilder::new()
            .ip_or_hostname(Some(opts.host.clone()))
            .user(Some(opts.user.clone()))
            .pass(Some(opts.password.clone()))
            .db_name(Some(opts.database.clone()));
        if let Some(port) = opts.port {
            builder = builder.tcp_port(port);
        }

        let descriptor = opts.descriptor();
        let pool = spawn_blocking(move || {
            mysql_lib::Pool::new(builder).map_err(|e| {
                sqlchain_error::connection!("Mysql connect `{}` error: {}", descriptor, e)
            })
        })
        .await
        .map_err(|e| sqlchain_error::runtime!("Tokio join error: {}", e))??;

        Ok(Self::new(pool, opts.acquire_timeout))
    }

    pub async fn connect_url(url: &str) -> Result<Self> {
        let opts = mysql_lib::Opts::from_url(url)
            .map_err(|e| sqlchain_error::connection!("Invalid mysql url: {}", e))?;

        let pool = spawn_blocking(move || {
            mysql_lib::Pool::new(opts)
                .map_err(|e| sqlchain_error::connection!("Mysql connect error: {}", e))
        })
        .await
        .map_err(|e| sqlchain_error::runtime!("Tokio join error: {}", e))??;

        Ok(Self::new(pool, None))
    }
}

/// Pool wait in milliseconds, saturated at `u32::MAX`
fn timeout_ms(timeout: Duration) -> u32 {
    u32::try_from(timeout.as_millis()).unwrap_or(u32::MAX)
}

fn get_conn(pool: &mysql_lib::Pool, timeout: Option<Duration>) -> Result<mysql_lib::PooledConn> {
    log::trace!("Get connection from pool");
    match timeout {
        Some(timeout) => pool
            .try_get_conn(timeout_ms(timeout))
            .map_err(|e| sqlchain_error::timeout!("Get connection from pool timeout: {}", e)),
        None => pool
            .get_conn()
            .map_err(|e| sqlchain_error::connection!("Get connection from pool error: {}", e)),
    }
}

#[async_trait::async_trait]
impl Driver for MysqlPoolProxy {
    async fn query(&self, sql: &str) -> Result<QueryResult> {
        let sql_string = sql.to_string();
        let pool = self.pool.clone();
        let timeout = self.acquire_timeout;
        let res = spawn_blocking(move || {
            let mut conn = get_conn(&pool, timeout)?;

            log::trace!("Execute `{}`", sql_string);
            let mut result = conn.query_iter(&sql_string).map_err(|e| {
                sqlchain_error::database!("Query error: {}, sql: `{}`", e, sql_string)
            })?;

            if result.columns().as_ref().is_empty() {
                let res = QueryResult::Affected {
                    rows: result.affected_rows(),
                    last_insert_id: result.last_insert_id(),
                };
                log::trace!("Result: {:?}", res);
                return Result::Ok(res);
            }

            let mut rows = Vec::<Row>::new();
            for res in &mut result {
                let mysql_row =
                    res.map_err(|e| sqlchain_error::database!("Get row error: {}", e))?;
                let row = mysql_row_to_row(mysql_row)?;
                log::trace!("Append row: {:?}", row);
                rows.push(row);
            }

            Result::Ok(QueryResult::Rows(rows))
        })
        .await
        .map_err(|e| sqlchain_error::runtime!("Tokio join error: {}", e))??;

        Ok(res)
    }

    async fn prepare(&self, sql: &str) -> Result<PreparedStatement> {
        let sql_string = sql.to_string();
        let pool = self.pool.clone();
        let timeout = self.acquire_timeout;
        let stmt = spawn_blocking(move || {
            let mut conn = get_conn(&pool, timeout)?;

            log::trace!("Prepare `{}`", sql_string);
            let stmt = conn.prep(&sql_string).map_err(|e| {
                sqlchain_error::database!("Prepare error: {}, sql: `{}`", e, sql_string)
            })?;

            Result::Ok(PreparedStatement {
                id: stmt.id(),
                params: stmt.num_params(),
                columns: stmt
                    .columns()
                    .iter()
                    .map(|c| c.name_str().to_string())
                    .collect(),
                sql: sql_string,
            })
        })
        .await
        .map_err(|e| sqlchain_error::runtime!("Tokio join error: {}", e))??;

        Ok(stmt)
    }
}

fn mysql_row_to_row(src: mysql_lib::Row) -> Result<Row> {
    let cols = src.columns_ref();
    let mut columns = Vec::with_capacity(src.len());
    let mut values = Vec::with_capacity(src.len());

    for i in 0..src.len() {
        let column_name = cols
            .get(i)
            .ok_or_else(|| sqlchain_error::database!("Cannot get column name of index {}", i))?
            .name_str()
            .to_string();

        let value = match src.as_ref(i) {
            None | Some(mysql_lib::Value::NULL) => Value::Null,
            Some(mysql_lib::Value::Bytes(v)) => Value::Bytes(v.clone()),
            Some(mysql_lib::Value::Int(v)) => Value::I64(*v),
            Some(mysql_lib::Value::UInt(v)) => Value::U64(*v),
            Some(mysql_lib::Value::Float(v)) => Value::F32(*v),
            Some(mysql_lib::Value::Double(v)) => Value::F64(*v),
            Some(mysql_value) => {
                return Err(sqlchain_error::database!(
                    "Unsupported mysql value type: {:?}",
                    mysql_value
                ))
            }
        };

        columns.push(column_name);
        values.push(value);
    }

    Ok(Row::new(columns, values))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_timeout_ms() {
        assert_eq!(timeout_ms(Duration::from_millis(0)), 0);
        assert_eq!(timeout_ms(Duration::from_secs(5)), 5000);
        assert_eq!(timeout_ms(Duration::from_millis(1500)), 1500);
        assert_eq!(timeout_ms(Duration::from_secs(u64::MAX)), u32::MAX);
    }
}
