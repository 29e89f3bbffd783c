//! Terminal front end: comment table, notifications and the input session

pub mod notify;
pub mod session;
pub mod table;

pub use notify::{Notice, NoticeLevel};
pub use session::{run_once, run_session};
