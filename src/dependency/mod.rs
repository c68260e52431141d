mod clock;
pub mod console;
mod history;
mod item_store;

pub use clock::{file_stamp, now_iso8601, performance_now};
pub use history::HistoryStack;
pub use item_store::ItemStore;
