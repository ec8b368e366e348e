use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, generate_timestamp, generate_uuid_v7},
    diet_chart::entities::{DietChart, WeekPlan},
};

#[derive(Debug, Clone)]
pub struct SaveDietChartInput {
    pub patient_id: Option<Uuid>,
    pub name: String,
    pub description: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub week_plan: WeekPlan,
    pub special_instructions: Option<String>,
}

impl SaveDietChartInput {
    /// Checks the input and returns the selected patient.
    pub fn validate(&self) -> Result<Uuid, CoreError> {
        let patient_id = self
            .patient_id
            .ok_or_else(|| CoreError::Validation("select a patient for this chart".to_string()))?;

        if self.name.trim().is_empty() {
            return Err(CoreError::Validation("chart name is required".to_string()));
        }

        if let (Some(start), Some(end)) = (self.start_date, self.end_date)
            && end < start
        {
            return Err(CoreError::Validation(
                "end date cannot precede the start date".to_string(),
            ));
        }

        Ok(patient_id)
    }

    /// Builds the chart to persist. A missing start date means today, and the end date is
    /// checked against whichever start date applies.
    pub fn into_chart(self, practitioner_id: Uuid) -> Result<DietChart, CoreError> {
        let patient_id = self.validate()?;
        let (now, _) = generate_timestamp();
        let start_date = self.start_date.unwrap_or_else(|| now.date_naive());

        if let Some(end) = self.end_date
            && end < start_date
        {
            return Err(CoreError::Validation(
                "end date cannot precede the start date".to_string(),
            ));
        }

        Ok(DietChart {
            id: generate_uuid_v7(),
            name: self.name.trim().to_string(),
            description: self.description.filter(|d| !d.trim().is_empty()),
            patient_id,
            practitioner_id,
            start_date,
            end_date: self.end_date,
            is_active: true,
            week_plan: self.week_plan,
            special_instructions: self.special_instructions.filter(|s| !s.trim().is_empty()),
            created_at: now,
        })
    }
}
