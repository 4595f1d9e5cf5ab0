// Standard Library Imports
use std::{
    collections::HashMap,
    fmt::{self, Display, Formatter},
};

// Local Crate Imports
use crate::job::JobId;

// Public API ==========================================================================================================

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ApplicantCount {
    Known(u64),
    /// The count request for this job failed
    Unknown,
}

/// Applicant counts keyed by job, where jobs without an entry have no applicants (yet)
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ApplicantCounts(HashMap<JobId, ApplicantCount>);

impl ApplicantCounts {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, job_id: JobId) -> ApplicantCount {
        self.0.get(&job_id).copied().unwrap_or_default()
    }

    pub fn insert(&mut self, job_id: JobId, count: ApplicantCount) {
        self.0.insert(job_id, count);
    }

    pub fn remove(&mut self, job_id: JobId) {
        self.0.remove(&job_id);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for ApplicantCount {
    fn default() -> Self {
        Self::Known(0)
    }
}

impl Display for ApplicantCount {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(1) => write!(f, "1 Applicant"),
            Self::Known(count) => write!(f, "{count} Applicants"),
            Self::Unknown => write!(f, "? Applicants"),
        }
    }
}

impl FromIterator<(JobId, ApplicantCount)> for ApplicantCounts {
    fn from_iter<T: IntoIterator<Item = (JobId, ApplicantCount)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

// Unit Tests ==========================================================================================================
