//! Oracle access errors.
//!
//! The stat computations degrade to neutral values when a collaborator is
//! absent; these errors exist for callers that *require* a lookup table
//! (content validation, editor panels that list table rows).

use crate::error::{ErrorSeverity, RulesError};

/// Errors raised when a required oracle is not present in the environment.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    /// RaceOracle is not available in the environment.
    #[error("RaceOracle not available")]
    RacesNotAvailable,

    /// AppearanceOracle is not available in the environment.
    #[error("AppearanceOracle not available")]
    AppearancesNotAvailable,

    /// ClassOracle is not available in the environment.
    #[error("ClassOracle not available")]
    ClassesNotAvailable,

    /// ItemOracle is not available in the environment.
    #[error("ItemOracle not available")]
    ItemsNotAvailable,
}

impl RulesError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        // Missing oracles are fatal for callers that insisted on them
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        use OracleError::*;
        match self {
            RacesNotAvailable => "ORACLE_RACES_NOT_AVAILABLE",
            AppearancesNotAvailable => "ORACLE_APPEARANCES_NOT_AVAILABLE",
            ClassesNotAvailable => "ORACLE_CLASSES_NOT_AVAILABLE",
            ItemsNotAvailable => "ORACLE_ITEMS_NOT_AVAILABLE",
        }
    }
}
