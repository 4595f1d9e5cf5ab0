// External Crate Imports
use color_eyre::Result;
use tracing::{error, info};

// Local Crate Imports
use crate::{api::JobApi, job::JobId};

// Public API ==========================================================================================================

/// The state of a job's delete-confirmation dialog
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum Confirmation {
    #[default]
    Closed,
    Open,
    Deleting,
    /// The last delete request failed with this message, and can be retried or dismissed
    Failed(String),
}

impl Confirmation {
    #[must_use]
    pub const fn visible(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    #[must_use]
    pub const fn busy(&self) -> bool {
        matches!(self, Self::Deleting)
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        if let Self::Failed(message) = self {
            Some(message)
        } else {
            None
        }
    }

    pub fn request(&mut self) {
        if *self == Self::Closed {
            *self = Self::Open;
        }
    }

    pub fn cancel(&mut self) {
        if !self.busy() {
            *self = Self::Closed;
        }
    }

    /// Returns `true` if the caller should now send the delete request
    pub fn confirm(&mut self) -> bool {
        match self {
            Self::Open | Self::Failed(_) => {
                *self = Self::Deleting;
                true
            }
            Self::Closed | Self::Deleting => false,
        }
    }

    /// Records the outcome of the delete request, returning `true` if the job is gone and should be removed
    pub fn settle(&mut self, result: Result<()>) -> bool {
        if !self.busy() {
            return false;
        }

        match result {
            Ok(()) => {
                *self = Self::Closed;
                true
            }
            Err(report) => {
                *self = Self::Failed(format!("{report:#}"));
                false
            }
        }
    }
}

pub async fn delete_job(api: &impl JobApi, job_id: JobId) -> Result<()> {
    let result = api.delete_job(job_id).await;
    match &result {
        Ok(()) => info!(%job_id, "deleted job"),
        Err(report) => error!(%job_id, "couldn't delete job: {report:#}"),
    }

    result
}

// Unit Tests ==========================================================================================================
