pub mod list_diet_charts;
pub mod my_diet_charts;
pub mod save_diet_chart;
