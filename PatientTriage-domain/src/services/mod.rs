pub mod rules;
pub mod output;
pub mod classification;

// Domain services
// This module contains business logic implementations.

// Re-export service traits and factory functions
pub use classification::{
    create_default_classification_service, ClassificationError, ClassificationService,
    ClassificationServiceTrait, INVALID_READING_LOG_MESSAGE,
};
pub use output::{ConsoleOutput, OutputSink};
