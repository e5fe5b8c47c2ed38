pub(crate) mod query;
pub use query::Query;

pub(crate) mod record;
pub use record::Record;
