use chrono::Utc;
use sea_orm::ActiveValue::Set;

use crate::domain::{
    common::entities::app_errors::CoreError,
    diet_chart::entities::{DietChart, PersistedWeekPlan},
};
use crate::entity::diet_charts::{ActiveModel as DietChartActiveModel, Model as DietChartModel};

impl TryFrom<DietChartModel> for DietChart {
    type Error = CoreError;

    fn try_from(model: DietChartModel) -> Result<Self, Self::Error> {
        let meals = PersistedWeekPlan::from_value(model.meals)?;

        Ok(DietChart {
            id: model.id,
            name: model.name,
            description: model.description,
            patient_id: model.patient_id,
            practitioner_id: model.practitioner_id,
            start_date: model.start_date,
            end_date: model.end_date,
            is_active: model.is_active,
            week_plan: meals.weekly_plan,
            special_instructions: model.special_instructions,
            created_at: model.created_at.with_timezone(&Utc),
        })
    }
}

impl TryFrom<DietChart> for DietChartActiveModel {
    type Error = CoreError;

    fn try_from(chart: DietChart) -> Result<Self, Self::Error> {
        let meals = PersistedWeekPlan::new(chart.week_plan).to_value()?;
        let created_at = chart.created_at.fixed_offset();

        Ok(DietChartActiveModel {
            id: Set(chart.id),
            patient_id: Set(chart.patient_id),
            practitioner_id: Set(chart.practitioner_id),
            name: Set(chart.name),
            description: Set(chart.description),
            start_date: Set(chart.start_date),
            end_date: Set(chart.end_date),
            meals: Set(meals),
            is_active: Set(chart.is_active),
            special_instructions: Set(chart.special_instructions),
            created_at: Set(created_at),
            updated_at: Set(created_at),
        })
    }
}
