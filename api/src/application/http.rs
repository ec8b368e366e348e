pub mod dashboard;
pub mod diet_chart;
pub mod diet_plan;
pub mod food;
pub mod health;
pub mod patient;
pub mod server;
