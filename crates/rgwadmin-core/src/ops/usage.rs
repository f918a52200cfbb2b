//! Usage accessors: `get_usage` and `trim_usage`.

use rgwadmin_model::{AdminOperation, Usage};
use tracing::debug;
use typed_builder::TypedBuilder;

use crate::client::AdminClient;
use crate::error::AdminResult;

/// Filters for [`AdminClient::get_usage`].
#[derive(Debug, Clone, Default, TypedBuilder)]
pub struct UsageQuery {
    /// Restrict to one user.
    #[builder(default, setter(strip_option, into))]
    pub uid: Option<String>,
    /// Start of the range, e.g. `2024-03-01 00:00:00`.
    #[builder(default, setter(strip_option, into))]
    pub start: Option<String>,
    /// End of the range.
    #[builder(default, setter(strip_option, into))]
    pub end: Option<String>,
    /// Include per-bucket entries.
    #[builder(default, setter(strip_option))]
    pub show_entries: Option<bool>,
    /// Include per-user totals.
    #[builder(default, setter(strip_option))]
    pub show_summary: Option<bool>,
}

/// Filters for [`AdminClient::trim_usage`].
#[derive(Debug, Clone, Default, TypedBuilder)]
pub struct TrimUsageQuery {
    /// Restrict to one user.
    #[builder(default, setter(strip_option, into))]
    pub uid: Option<String>,
    /// Start of the range.
    #[builder(default, setter(strip_option, into))]
    pub start: Option<String>,
    /// End of the range.
    #[builder(default, setter(strip_option, into))]
    pub end: Option<String>,
    /// Required by the gateway to trim every user's log.
    #[builder(default, setter(strip_option))]
    pub remove_all: Option<bool>,
}

impl AdminClient {
    /// Read the usage log.
    pub async fn get_usage(&self, query: &UsageQuery) -> AdminResult<Usage> {
        let request = self
            .request(AdminOperation::GetUsage)
            .format_json()
            .optional("uid", query.uid.as_deref())
            .optional("start", query.start.as_deref())
            .optional("end", query.end.as_deref())
            .optional("show_entries", query.show_entries)
            .optional("show_summary", query.show_summary)
            .build();
        self.fetch(request).await
    }

    /// Remove usage log entries. Returns `true` when the gateway sent no body.
    pub async fn trim_usage(&self, query: &TrimUsageQuery) -> AdminResult<bool> {
        let request = self
            .request(AdminOperation::TrimUsage)
            .optional("uid", query.uid.as_deref())
            .optional("start", query.start.as_deref())
            .optional("end", query.end.as_deref())
            .optional("remove_all", query.remove_all)
            .build();
        let trimmed = self.execute(request).await?;
        debug!(uid = ?query.uid, trimmed, "Trimmed usage log");
        Ok(trimmed)
    }
}
