use crate::application::http::{
    dashboard::router::DashboardApiDoc, diet_chart::router::DietChartApiDoc,
    diet_plan::router::DietPlanApiDoc, food::router::FoodApiDoc,
    patient::router::PatientApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "AyurDiet API"
    ),
    nest(
        (path = "/foods", api = FoodApiDoc),
        (path = "/patients", api = PatientApiDoc),
        (path = "/diet-charts", api = DietChartApiDoc),
        (path = "/diet-plans", api = DietPlanApiDoc),
        (path = "/dashboard", api = DashboardApiDoc),
    )
)]
pub struct ApiDoc;
