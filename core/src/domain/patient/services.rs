use tracing::{info, instrument};
use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::{
        entities::app_errors::CoreError,
        policies::{Policy, ensure_policy},
        services::Service,
    },
    diet_chart::ports::DietChartRepository,
    diet_plan::ports::LLMClient,
    food::ports::FoodRepository,
    patient::{
        entities::Patient,
        ports::{PatientPolicy, PatientRepository, PatientService},
        value_objects::CreatePatientInput,
    },
    profile::ports::ProfileRepository,
};

impl<P, F, D, PR, LLM> PatientService for Service<P, F, D, PR, LLM>
where
    P: PatientRepository,
    F: FoodRepository,
    D: DietChartRepository,
    PR: ProfileRepository,
    LLM: LLMClient,
{
    #[instrument(skip(self, input), fields(user_id = %identity.user_id))]
    async fn create_patient(
        &self,
        identity: Identity,
        input: CreatePatientInput,
    ) -> Result<Patient, CoreError> {
        let profile = self.policy.get_profile_from_identity(&identity).await?;

        ensure_policy(
            self.policy.can_manage_patients(&profile).await,
            "only practitioners can add patients",
        )?;

        let patient = Patient::new(profile.id, input)?;

        if let Some(email) = patient.email.clone()
            && self
                .patient_repository
                .find_by_email(profile.id, email)
                .await?
                .is_some()
        {
            return Err(CoreError::Conflict(
                "this patient is already linked to your practice".to_string(),
            ));
        }

        let created = self.patient_repository.create_patient(patient).await?;
        info!(patient_id = %created.id, "patient created");

        Ok(created)
    }

    #[instrument(skip(self, identity))]
    async fn list_patients(&self, identity: Option<Identity>) -> Result<Vec<Patient>, CoreError> {
        let Some(profile) = self.reader_profile(identity).await else {
            return Ok(vec![]);
        };

        let mut patients = self
            .patient_repository
            .list_by_practitioner(profile.id)
            .await?;
        patients.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(patients)
    }

    #[instrument(skip(self), fields(user_id = %identity.user_id))]
    async fn get_patient(&self, identity: Identity, patient_id: Uuid) -> Result<Patient, CoreError> {
        let profile = self.policy.get_profile_from_identity(&identity).await?;

        let patient = self
            .patient_repository
            .get_by_id(patient_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        ensure_policy(
            self.policy.can_view_patient(&profile, &patient).await,
            "this patient belongs to another practice",
        )?;

        Ok(patient)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        common::testing::{KnownProfiles, identity_for, practitioner, test_service},
        diet_chart::ports::MockDietChartRepository,
        diet_plan::ports::MockLLMClient,
        food::ports::MockFoodRepository,
        patient::{entities::Dosha, ports::MockPatientRepository},
        profile::entities::UserRole,
    };

    fn input(email: Option<&str>) -> CreatePatientInput {
        CreatePatientInput {
            name: "Ravi Menon".to_string(),
            email: email.map(str::to_string),
            age: 41,
            gender: "male".to_string(),
            weight: None,
            height: None,
            dominant_dosha: Some(Dosha::Kapha),
            secondary_dosha: None,
            medical_history: None,
            allergies: Some("gluten".to_string()),
            notes: None,
            meal_frequency: None,
            water_intake: None,
            bowel_movements: None,
        }
    }

    #[tokio::test]
    async fn create_patient_assigns_the_practitioner() {
        let profile = practitioner();
        let profile_id = profile.id;
        let identity = identity_for(&profile);

        let mut patients = MockPatientRepository::new();
        patients
            .expect_find_by_email()
            .returning(|_, _| Box::pin(async { Ok(None) }));
        patients
            .expect_create_patient()
            .times(1)
            .returning(|patient| Box::pin(async move { Ok(patient) }));

        let service = test_service(
            patients,
            MockFoodRepository::new(),
            MockDietChartRepository::new(),
            KnownProfiles::new(vec![profile]),
            MockLLMClient::new(),
        );

        let created = service
            .create_patient(identity, input(Some("ravi@example.com")))
            .await
            .unwrap();

        assert_eq!(created.practitioner_id, profile_id);
        assert_eq!(created.allergies, vec!["gluten"]);
    }

    #[tokio::test]
    async fn create_patient_rejects_duplicate_email_in_same_practice() {
        let profile = practitioner();
        let identity = identity_for(&profile);
        let existing = Patient::new(profile.id, input(Some("ravi@example.com"))).unwrap();

        let mut patients = MockPatientRepository::new();
        patients.expect_find_by_email().returning(move |_, _| {
            let existing = existing.clone();
            Box::pin(async move { Ok(Some(existing)) })
        });
        patients.expect_create_patient().never();

        let service = test_service(
            patients,
            MockFoodRepository::new(),
            MockDietChartRepository::new(),
            KnownProfiles::new(vec![profile]),
            MockLLMClient::new(),
        );

        let result = service
            .create_patient(identity, input(Some("ravi@example.com")))
            .await;

        assert!(matches!(result, Err(CoreError::Conflict(_))));
    }

    #[tokio::test]
    async fn patients_cannot_add_patients() {
        let mut profile = practitioner();
        profile.role = UserRole::Patient;
        let identity = identity_for(&profile);

        let service = test_service(
            MockPatientRepository::new(),
            MockFoodRepository::new(),
            MockDietChartRepository::new(),
            KnownProfiles::new(vec![profile]),
            MockLLMClient::new(),
        );

        let result = service.create_patient(identity, input(None)).await;
        assert!(matches!(result, Err(CoreError::Forbidden(_))));
    }

    #[tokio::test]
    async fn anonymous_listing_is_empty() {
        let mut patients = MockPatientRepository::new();
        patients.expect_list_by_practitioner().never();

        let service = test_service(
            patients,
            MockFoodRepository::new(),
            MockDietChartRepository::new(),
            KnownProfiles::new(vec![]),
            MockLLMClient::new(),
        );

        assert!(service.list_patients(None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn other_practices_cannot_read_a_patient() {
        let owner = practitioner();
        let intruder = practitioner();
        let identity = identity_for(&intruder);
        let patient = Patient::new(owner.id, input(None)).unwrap();
        let patient_id = patient.id;

        let mut patients = MockPatientRepository::new();
        patients.expect_get_by_id().returning(move |_| {
            let patient = patient.clone();
            Box::pin(async move { Ok(Some(patient)) })
        });

        let service = test_service(
            patients,
            MockFoodRepository::new(),
            MockDietChartRepository::new(),
            KnownProfiles::new(vec![owner, intruder]),
            MockLLMClient::new(),
        );

        let result = service.get_patient(identity, patient_id).await;
        assert!(matches!(result, Err(CoreError::Forbidden(_))));
    }
}
