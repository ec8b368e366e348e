pub mod create_patient;
pub mod get_patient;
pub mod list_patients;
