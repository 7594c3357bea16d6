pub mod analytics;
pub mod asset;
pub mod catalog;
pub mod guarantee;
pub mod holding;
pub mod settings;
pub mod transaction;
