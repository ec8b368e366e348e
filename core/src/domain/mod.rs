pub mod authentication;
pub mod common;
pub mod dashboard;
pub mod diet_chart;
pub mod diet_plan;
pub mod food;
pub mod patient;
pub mod profile;
