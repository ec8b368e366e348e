use crate::domain::{
    common::{entities::app_errors::CoreError, policies::AyurDietPolicy},
    patient::{entities::Patient, ports::PatientPolicy},
    profile::{entities::Profile, ports::ProfileRepository},
};

impl<PR> PatientPolicy for AyurDietPolicy<PR>
where
    PR: ProfileRepository,
{
    async fn can_manage_patients(&self, profile: &Profile) -> Result<bool, CoreError> {
        Ok(profile.is_practitioner())
    }

    async fn can_view_patient(
        &self,
        profile: &Profile,
        patient: &Patient,
    ) -> Result<bool, CoreError> {
        Ok(profile.is_practitioner() && patient.is_owned_by(profile.id))
    }
}
