pub mod ddl;
mod filter;
mod sanitize;
mod schema;
mod statement;
mod values;

pub use filter::{CustomOperator, Filter, Operator};
pub use sanitize::sanitize;
pub use schema::Schema;
pub use statement::{Mode, Statement};
pub use values::Values;
