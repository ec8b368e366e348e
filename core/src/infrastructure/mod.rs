pub mod auth;
pub mod db;
pub mod diet_chart;
pub mod fallback;
pub mod fixtures;
pub mod food;
pub mod llm;
pub mod patient;
pub mod profile;
