//! The generic command-handler execution protocol.
//!
//! Every handler follows the same lifecycle:
//!
//! ```text
//! Command
//!   ↓
//! 1. Prepare: fetch the entity named by the command, or construct a fresh one
//!   ↓
//! 2. Accumulate validation rules on the shared specification
//!   ↓
//! 3. Evaluate once (first failing rule aborts, before any mutation)
//!   ↓
//! 4. Apply field mutations from the command onto the entity
//!   ↓
//! 5. Persist via exactly one repository call
//!   ↓
//! 6. Map the persisted entity to a receipt (culture-invariant)
//! ```
//!
//! The lifecycle lives in the provided [`MutationHandler::execute`]; concrete
//! handlers supply the per-command hooks. Static dispatch throughout, no
//! trait objects. Prepare/persist failures funnel through
//! [`handle_exception`](crate::fault::handle_exception); validation failures
//! are already classified business errors and propagate as-is.

use core::any::type_name;

use wastenot_core::{Entity, ServiceError, ServiceReceipt};
use wastenot_validation::Specification;

use crate::fault::handle_exception;

/// One command type's slice of the shared execution protocol.
pub trait MutationHandler {
    type Command;
    type Entity: Entity;

    /// Fetch the entity the command names, or construct a fresh one (add
    /// paths; identifier left vacant for the store to assign).
    fn prepare(&self, command: &Self::Command) -> anyhow::Result<Self::Entity>;

    /// Register this command type's validation rules. The count is fixed per
    /// command type; optional fields contribute rules only when present.
    fn validation_rules<'a>(
        &self,
        command: &'a Self::Command,
        entity: &'a Self::Entity,
        spec: Specification<'a>,
    ) -> Specification<'a>;

    /// Apply field mutations from the command (modify paths). Identity by
    /// default.
    fn apply(&self, _command: &Self::Command, entity: Self::Entity) -> Self::Entity {
        entity
    }

    /// Issue the single repository call for this command. Delete paths return
    /// the previously fetched entity so it can still be mapped.
    fn persist(&self, entity: Self::Entity) -> anyhow::Result<Self::Entity>;

    /// Map the persisted entity to the receipt (one mapper call, `None`
    /// culture).
    fn map(&self, entity: &Self::Entity) -> ServiceReceipt;

    /// Run the full protocol for one command.
    fn execute(&self, command: &Self::Command) -> Result<ServiceReceipt, ServiceError> {
        let entity = self
            .prepare(command)
            .map_err(|e| handle_exception::<Self::Command>(e))?;

        let spec = self.validation_rules(command, &entity, Specification::new());
        tracing::debug!(
            command = type_name::<Self::Command>(),
            rules = spec.rule_count(),
            "evaluating validation rules"
        );
        spec.evaluate()?;

        let entity = self.apply(command, entity);
        let persisted = self
            .persist(entity)
            .map_err(|e| handle_exception::<Self::Command>(e))?;

        let receipt = self.map(&persisted);
        tracing::debug!(
            command = type_name::<Self::Command>(),
            identifier = ?receipt.identifier,
            "command completed"
        );
        Ok(receipt)
    }
}
