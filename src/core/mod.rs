//! Application logic between the CLI handlers and the entry store.

pub mod add;
pub mod del;
pub mod edit;
pub mod log;
pub mod week;

pub use add::AddLogic;
pub use del::DeleteLogic;
pub use edit::{EditLogic, EntryChanges};
pub use log::LogLogic;
pub use week::{DayTotal, WeekLogic, WeekSummary};
