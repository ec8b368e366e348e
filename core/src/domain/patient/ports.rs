use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    patient::{entities::Patient, value_objects::CreatePatientInput},
    profile::entities::Profile,
};

#[cfg_attr(test, mockall::automock)]
pub trait PatientService: Send + Sync {
    fn create_patient(
        &self,
        identity: Identity,
        input: CreatePatientInput,
    ) -> impl Future<Output = Result<Patient, CoreError>> + Send;

    /// Patients of the caller's practice, newest first. Anonymous callers get an empty list.
    fn list_patients(
        &self,
        identity: Option<Identity>,
    ) -> impl Future<Output = Result<Vec<Patient>, CoreError>> + Send;

    fn get_patient(
        &self,
        identity: Identity,
        patient_id: Uuid,
    ) -> impl Future<Output = Result<Patient, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait PatientRepository: Send + Sync {
    fn create_patient(
        &self,
        patient: Patient,
    ) -> impl Future<Output = Result<Patient, CoreError>> + Send;

    fn get_by_id(
        &self,
        patient_id: Uuid,
    ) -> impl Future<Output = Result<Option<Patient>, CoreError>> + Send;

    fn list_by_practitioner(
        &self,
        practitioner_id: Uuid,
    ) -> impl Future<Output = Result<Vec<Patient>, CoreError>> + Send;

    fn find_by_email(
        &self,
        practitioner_id: Uuid,
        email: String,
    ) -> impl Future<Output = Result<Option<Patient>, CoreError>> + Send;

    /// Every patient record linked to `email`, across practices.
    fn list_by_email(
        &self,
        email: String,
    ) -> impl Future<Output = Result<Vec<Patient>, CoreError>> + Send;

    fn count_by_practitioner(
        &self,
        practitioner_id: Uuid,
    ) -> impl Future<Output = Result<u64, CoreError>> + Send;
}

pub trait PatientPolicy: Send + Sync {
    fn can_manage_patients(
        &self,
        profile: &Profile,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;

    fn can_view_patient(
        &self,
        profile: &Profile,
        patient: &Patient,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;
}
