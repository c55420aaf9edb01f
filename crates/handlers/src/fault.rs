//! Failure classification at the handler boundary.
//!
//! Known error categories pass through unchanged; anything unrecognized is
//! normalized into a system error carrying the command and receipt type
//! names plus the original message, with the original error as cause. Every
//! path terminates in an error value; nothing is swallowed.

use core::any::type_name;

use wastenot_core::{RepositoryError, ServiceError, ServiceReceipt};

/// Where a failure surfaced: the command being executed and the receipt type
/// it would have produced.
#[derive(Debug, Clone, Copy)]
pub struct FaultContext {
    pub command: &'static str,
    pub receipt: &'static str,
}

impl FaultContext {
    pub fn of<C: ?Sized>() -> Self {
        Self {
            command: type_name::<C>(),
            receipt: type_name::<ServiceReceipt>(),
        }
    }
}

/// Normalizes arbitrary failures into the service error taxonomy.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExceptionBuilder;

impl ExceptionBuilder {
    /// Classify `err` against the known categories.
    ///
    /// Service errors (business, repository, system alike) are returned
    /// unchanged. A bare repository error is lifted into its service-level
    /// wrapper. Everything else becomes a system error whose message names
    /// the command and receipt types and whose `source` is the original.
    pub fn build(&self, err: anyhow::Error, context: FaultContext) -> ServiceError {
        let err = match err.downcast::<ServiceError>() {
            Ok(known) => return known,
            Err(err) => err,
        };
        let err = match err.downcast::<RepositoryError>() {
            Ok(repo) => return ServiceError::Repository(repo),
            Err(err) => err,
        };

        let message = format!(
            "failed executing {} producing {}: {}",
            context.command, context.receipt, err
        );
        tracing::error!(command = context.command, error = %err, "unrecognized failure");
        ServiceError::system(message, err)
    }
}

/// Classify a failure raised while executing a command of type `C`.
pub fn handle_exception<C: ?Sized>(err: anyhow::Error) -> ServiceError {
    ExceptionBuilder.build(err, FaultContext::of::<C>())
}
