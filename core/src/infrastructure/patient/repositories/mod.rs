pub mod patient_repository;
