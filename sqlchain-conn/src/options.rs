use std::time::Duration;

/// Connection settings of a MySQL server
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use sqlchain_conn::ConnectOptions;
///
/// let opts = ConnectOptions::new("localhost", "root", "secret", "app")
///     .port(3307)
///     .acquire_timeout(Duration::from_secs(3));
///
/// assert_eq!(opts.descriptor(), "host=localhost port=3307 user=root password=*** db=app");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectOptions {
    pub host: String,
    pub port: Option<u16>,
    pub user: String,
    pub password: String,
    pub database: String,
    pub acquire_timeout: Option<Duration>, // Wait forever if None
}

impl ConnectOptions {
    pub fn new(host: &str, user: &str, password: &str, database: &str) -> Self {
        Self {
            host: host.into(),
            user: user.into(),
            password: password.into(),
            database: database.into(),
            ..Default::default()
        }
    }

    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Max time to wait for a pooled connection
    pub fn acquire_timeout(mut self, timeout: Duration) -> Self {
        self.acquire_timeout = Some(timeout);
        self
    }

    /// Connection descriptor with redacted password, used for logging
    pub fn descriptor(&self) -> String {
        let mut parts = vec![format!("host={}", self.host)];
        if let Some(port) = self.port {
            parts.push(format!("port={}", port));
        }
        parts.push(format!("user={}", self.user));
        parts.push("password=***".into());
        parts.push(format!("db={}", self.database));

        parts.join(" ")
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_descriptor_hides_password() {
        let opts = ConnectOptions::new("db.local", "app", "hunter2", "shop");

        assert_eq!(opts.descriptor(), "host=db.local user=app password=*** db=shop");
        assert!(!opts.descriptor().contains("hunter2"));
        assert_eq!(opts.acquire_timeout, None);
    }
}
