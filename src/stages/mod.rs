pub mod fetch;
pub mod notify;
pub mod summarize;

pub use fetch::fetch_call_logs;
pub use notify::send_latest_summary;
pub use summarize::summarize_call_logs;
