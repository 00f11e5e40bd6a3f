pub mod employment;
pub mod history_summary;
pub mod tracker;
