pub mod initialize;
pub mod log;
pub mod models;
pub mod pool;
pub mod queries;
pub mod store;

pub use models::{Entry, EntryUpdate, LogLine};
pub use store::EntryStore;
