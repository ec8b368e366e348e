use tracing::{error, info, instrument, warn};

use crate::domain::{
    authentication::value_objects::Identity,
    common::{
        entities::app_errors::CoreError,
        generate_timestamp,
        policies::{Policy, ensure_policy},
        services::Service,
    },
    diet_chart::{builder::DietChartBuilder, ports::DietChartRepository},
    diet_plan::{
        entities::{DietPlanGeneration, GenerationMetadata},
        parser::parse_diet_plan_reply,
        ports::{DietPlanService, LLMClient},
        prompt::build_prompt,
        schema::get_diet_plan_schema,
        value_objects::{DietPlanRequest, GenerateDietPlanInput},
    },
    food::ports::FoodRepository,
    patient::ports::{PatientPolicy, PatientRepository},
    profile::ports::ProfileRepository,
};

const DEFAULT_CHART_NAME: &str = "AI Generated Diet Plan";

impl<P, F, D, PR, LLM> DietPlanService for Service<P, F, D, PR, LLM>
where
    P: PatientRepository,
    F: FoodRepository,
    D: DietChartRepository,
    PR: ProfileRepository,
    LLM: LLMClient,
{
    #[instrument(skip(self, input), fields(user_id = %identity.user_id, patient_id = %input.patient_id))]
    async fn generate_diet_plan(
        &self,
        identity: Identity,
        input: GenerateDietPlanInput,
    ) -> Result<DietPlanGeneration, CoreError> {
        let duration = input.duration()?;
        let profile = self.policy.get_profile_from_identity(&identity).await?;

        let patient = self
            .patient_repository
            .get_by_id(input.patient_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        ensure_policy(
            self.policy.can_view_patient(&profile, &patient).await,
            "this patient belongs to another practice",
        )?;

        let foods = match self
            .food_repository
            .list(self.generation.food_context_limit)
            .await
        {
            Ok(foods) => foods,
            Err(e) => {
                warn!("food catalog unavailable, generating without it: {e}");
                vec![]
            }
        };

        let request = DietPlanRequest::new(
            &patient,
            duration,
            input.preferences,
            input.goals,
            foods,
        )?;

        let mut builder = DietChartBuilder::with_week_plan(
            input.current_plan.unwrap_or_default(),
            self.generation.slot_defaults,
        );
        let request_id = builder.begin_generation()?;

        info!(
            %request_id,
            duration,
            foods = request.available_foods.len(),
            "generating diet plan"
        );

        let prompt = build_prompt(&request);
        let reply = match self
            .llm_client
            .generate_with_text(prompt, get_diet_plan_schema())
            .await
        {
            Ok(reply) => reply,
            Err(e) => {
                error!(%request_id, "diet plan generation failed: {e}");
                builder.fail_generation(request_id, e.to_string())?;
                return Err(e);
            }
        };

        let plan = match parse_diet_plan_reply(&reply) {
            Ok(plan) => plan,
            Err(e) => {
                builder.fail_generation(request_id, e.to_string())?;
                return Err(e);
            }
        };

        let days_applied = builder.complete_generation(request_id, &plan)?;
        info!(%request_id, days_applied, "diet plan generated");

        let (generated_at, _) = generate_timestamp();
        let suggested_chart_name = plan
            .summary
            .clone()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_CHART_NAME.to_string());

        Ok(DietPlanGeneration {
            diet_plan: plan,
            week_plan: builder.into_week_plan(),
            metadata: GenerationMetadata {
                patient_name: patient.name,
                suggested_chart_name,
                duration,
                generated_at,
                days_applied,
                request_id,
            },
        })
    }
}
