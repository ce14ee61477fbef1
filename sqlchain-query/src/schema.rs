use crate::sanitize;

/// Column definitions of a `CREATE TABLE` statement
///
/// Passed to the populate callback of `create_table`, every declarator
/// appends one clause to the fragment.
///
/// # Examples
///
/// ```
/// use sqlchain_query::Schema;
///
/// let mut schema = Schema::new();
/// schema.id().varchar_with("name", 50).timestamp("created_at", "6");
///
/// assert_eq!(
///     schema.fragment(),
///     "`id` BIGINT(16), PRIMARY KEY (`id`), `name` VARCHAR(50), `created_at` TIMESTAMP(6)"
/// );
/// ```
#[derive(Debug, Default)]
pub struct Schema {
    clauses: Vec<String>,
    has_primary_key: bool,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare the primary key, only the first call has effect
    pub fn primary(&mut self, name: &str) -> &mut Self {
        let name = sanitize(name);
        if self.has_primary_key {
            log::warn!("Primary key already declared, ignore `{}`", name);
            return self;
        }

        self.has_primary_key = true;
        self.clauses.push(format!("PRIMARY KEY (`{}`)", name));
        self
    }

    /// `id BIGINT(16)` used as primary key
    pub fn id(&mut self) -> &mut Self {
        self.big_integer_with("id", 16).primary("id")
    }

    pub fn integer(&mut self, name: &str) -> &mut Self {
        self.integer_with(name, 11)
    }

    pub fn integer_with(&mut self, name: &str, width: u32) -> &mut Self {
        self.column(name, &format!("INT({})", width))
    }

    pub fn big_integer(&mut self, name: &str) -> &mut Self {
        self.big_integer_with(name, 20)
    }

    pub fn big_integer_with(&mut self, name: &str, width: u32) -> &mut Self {
        self.column(name, &format!("BIGINT({})", width))
    }

    pub fn varchar(&mut self, name: &str) -> &mut Self {
        self.varchar_with(name, 255)
    }

    pub fn varchar_with(&mut self, name: &str, width: u32) -> &mut Self {
        self.column(name, &format!("VARCHAR({})", width))
    }

    pub fn text(&mut self, name: &str) -> &mut Self {
        self.column(name, "TEXT")
    }

    pub fn medium_text(&mut self, name: &str) -> &mut Self {
        self.column(name, "MEDIUMTEXT")
    }

    pub fn date(&mut self, name: &str) -> &mut Self {
        self.column(name, "DATE")
    }

    pub fn time(&mut self, name: &str) -> &mut Self {
        self.column(name, "TIME")
    }

    pub fn date_time(&mut self, name: &str) -> &mut Self {
        self.column(name, "DATETIME")
    }

    /// `TIMESTAMP(<default>)`, the argument is sanitized like a name
    pub fn timestamp(&mut self, name: &str, default: &str) -> &mut Self {
        let ty = format!("TIMESTAMP({})", sanitize(default));
        self.column(name, &ty)
    }

    pub fn has_primary_key(&self) -> bool {
        self.has_primary_key
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Clauses joined by `, `, without trailing separator
    pub fn fragment(&self) -> String {
        self.clauses.join(", ")
    }

    fn column(&mut self, name: &str, ty: &str) -> &mut Self {
        self.clauses.push(format!("`{}` {}", sanitize(name), ty));
        self
    }
}
