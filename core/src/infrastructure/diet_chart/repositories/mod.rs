pub mod diet_chart_repository;
