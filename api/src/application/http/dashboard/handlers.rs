pub mod get_dosha_distribution;
pub mod get_recent_activity;
pub mod get_stats;
