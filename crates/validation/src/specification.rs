//! Rule specification: accumulate checks, evaluate once.
//!
//! A specification is a plain ordered list of (check, error) pairs. Handlers
//! register their command type's rules during validation, then call
//! [`Specification::evaluate`] exactly once. Evaluation runs checks in
//! registration order and surfaces the FIRST failing rule's error; rules
//! after the first failure are not run.
//!
//! Checks are deferred closures so they may borrow the command and entity
//! for the duration of one execution.

use wastenot_core::ServiceError;

struct Rule<'a> {
    check: Box<dyn FnOnce() -> bool + 'a>,
    error: ServiceError,
}

/// Ordered accumulator of validation rules.
#[derive(Default)]
pub struct Specification<'a> {
    rules: Vec<Rule<'a>>,
}

impl<'a> Specification<'a> {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Register a rule: `error` is raised if `check` comes back false.
    ///
    /// Builder-style so handlers can chain registrations.
    pub fn is_satisfied_by(
        mut self,
        check: impl FnOnce() -> bool + 'a,
        error: ServiceError,
    ) -> Self {
        self.rules.push(Rule {
            check: Box::new(check),
            error,
        });
        self
    }

    /// Number of registered rules. Fixed per command type, not data-dependent
    /// (optional fields contribute rules only when present).
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Run all checks in registration order; first failure wins.
    pub fn evaluate(self) -> Result<(), ServiceError> {
        for rule in self.rules {
            if !(rule.check)() {
                return Err(rule.error);
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Specification<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Specification")
            .field("rules", &self.rules.len())
            .finish()
    }
}
