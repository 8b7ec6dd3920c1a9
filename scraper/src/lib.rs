pub mod error;
pub mod exporter;
pub mod loader;
pub mod pipeline;
pub mod repositories;
pub mod screener;
