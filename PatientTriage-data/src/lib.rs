// PatientTriage Data
// This crate holds the diagnostic log that records patient processing notes

// Diagnostic log storage
pub mod repository;

// Data storage models
pub mod models;
