//! Service receipt: the response confirming a completed mutation.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Confirmation of a completed command, produced fresh per call.
///
/// Immutable once built. Carries the identifier of the entity the command
/// touched (vacant only for entities the store never identified) and the
/// moment the mutation took effect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceReceipt {
    pub identifier: Option<Uuid>,
    pub event_at: DateTime<Utc>,
}

impl ServiceReceipt {
    pub fn new(identifier: Option<Uuid>, event_at: DateTime<Utc>) -> Self {
        Self {
            identifier,
            event_at,
        }
    }
}

impl core::fmt::Display for ServiceReceipt {
    /// Culture-invariant rendering (RFC 3339 timestamp).
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.identifier {
            Some(id) => write!(
                f,
                "{} @ {}",
                id,
                self.event_at.to_rfc3339_opts(SecondsFormat::Secs, true)
            ),
            None => write!(
                f,
                "(unidentified) @ {}",
                self.event_at.to_rfc3339_opts(SecondsFormat::Secs, true)
            ),
        }
    }
}
