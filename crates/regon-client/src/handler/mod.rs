//! Search handlers, one per identifier kind, plus the full-report handler.
//!
//! A handler validates the identifier, calls the matching remote search and
//! translates the outcome into the domain types. All of them map remote
//! faults the same way:
//!
//! | Fault | Error |
//! |---|---|
//! | not found | `NotFound("Business with <KIND> <value> not found")` |
//! | invalid user key | `Authentication("Invalid API key")` |
//! | transport | `Connection("Failed to connect to GUS API")` |
//! | other | `Connection("Unexpected error: <message>")` |

mod full_report;
mod krs;
mod nip;
mod regon;

pub use full_report::FullReportHandler;
pub use krs::KrsSearchHandler;
pub use nip::NipSearchHandler;
pub use regon::RegonSearchHandler;

use crate::collection::SearchReportCollection;
use async_trait::async_trait;
use regon_api::{ApiFault, SearchReport};
use regon_core::{Identifier, IdentifierKind, RegistryError, Result};
use tracing::{error, info};

/// Looks up records for one identifier kind.
#[async_trait]
pub trait SearchHandler: Send + Sync {
    /// Identifier kind this handler accepts.
    fn kind(&self) -> IdentifierKind;

    /// Call the remote search for an already validated identifier.
    async fn perform_search(&self, identifier: &Identifier)
        -> regon_api::Result<Vec<SearchReport>>;

    /// Single-result lookup.
    ///
    /// No records yields [`SearchReport::empty`]. More than one record is a
    /// [`RegistryError::Connection`] whose source is
    /// [`RegistryError::AmbiguousResult`].
    async fn search_single(&self, value: &str) -> Result<SearchReport> {
        let identifier = Identifier::new(self.kind(), value)?;
        let mut records = fetch(self, &identifier).await?;

        match records.len() {
            0 => Ok(SearchReport::empty()),
            1 => Ok(records.remove(0)),
            count => {
                let ambiguous = RegistryError::AmbiguousResult { count };
                error!(identifier = %identifier, count, "{}", ambiguous);
                Err(RegistryError::connection(
                    format!("Unexpected error: {ambiguous}"),
                    ambiguous,
                ))
            }
        }
    }

    /// Collection lookup returning every record in order.
    async fn search(&self, value: &str) -> Result<SearchReportCollection> {
        let identifier = Identifier::new(self.kind(), value)?;
        let records = fetch(self, &identifier).await?;
        Ok(SearchReportCollection::new(records))
    }
}

async fn fetch<H>(handler: &H, identifier: &Identifier) -> Result<Vec<SearchReport>>
where
    H: SearchHandler + ?Sized,
{
    handler.perform_search(identifier).await.map_err(|fault| {
        let label = identifier.kind().label();
        map_fault(
            fault,
            || format!("Business with {label} {} not found", identifier.as_str()),
            || info!(value = identifier.as_str(), "{label} not found"),
        )
    })
}

/// Translate a remote fault, logging it at the level its kind calls for.
///
/// `not_found_message` and `log_not_found` are only used for
/// [`ApiFault::NotFound`], which the caller can describe better than the
/// fault itself.
fn map_fault(
    fault: ApiFault,
    not_found_message: impl FnOnce() -> String,
    log_not_found: impl FnOnce(),
) -> RegistryError {
    if let ApiFault::NotFound(_) = fault {
        log_not_found();
        return RegistryError::not_found(not_found_message(), fault);
    }

    match &fault {
        ApiFault::InvalidUserKey(_) => error!("Invalid API key"),
        ApiFault::Transport(detail) => error!(error = %detail, "Failed to connect to GUS API"),
        ApiFault::Other(message) => error!(error = %message, "Unexpected error"),
        ApiFault::NotFound(_) => {}
    }
    fault.into()
}
