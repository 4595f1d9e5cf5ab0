// Standard Library Imports
use std::{
    fmt::{self, Display, Formatter},
    num::ParseIntError,
    str::FromStr,
};

// External Crate Imports
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use color_eyre::eyre::{Report, eyre};
use serde::{Deserialize, Deserializer, Serialize};

// Public API ==========================================================================================================

pub const SKILL_SEPARATOR: &str = ", ";

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(u64);

impl JobId {
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }
}

/// The opaque identifier of the job provider whose jobs are being listed
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct RoleId(String);

impl RoleId {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct JobRecord {
    #[serde(rename = "jobId")]
    pub job_id: JobId,
    #[serde(rename = "jobTitle", default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(rename = "jobDescription", default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(rename = "jobExperience", default, deserialize_with = "null_as_default")]
    pub experience: String,
    #[serde(rename = "qualifiedEducation", default, deserialize_with = "null_as_default")]
    pub education: String,
    #[serde(rename = "jobLocation", default, deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(rename = "jobPostedDate", default, deserialize_with = "null_as_default")]
    pub posted_date: String,
    #[serde(rename = "isHired", default, deserialize_with = "null_as_default")]
    pub hired: bool,
    #[serde(rename = "jobSkills", default, deserialize_with = "null_as_default")]
    pub skills: String,
}

impl JobRecord {
    #[must_use]
    pub fn status(&self) -> HiringStatus {
        HiringStatus::from(self.hired)
    }

    /// Splits the stored skills on [`SKILL_SEPARATOR`], keeping their order and any duplicates
    #[must_use]
    pub fn skills(&self) -> Vec<&str> {
        if self.skills.is_empty() {
            Vec::new()
        } else {
            self.skills.split(SKILL_SEPARATOR).collect()
        }
    }

    #[must_use]
    pub fn posted_on(&self) -> Option<NaiveDate> {
        parse_posted_date(&self.posted_date)
    }

    #[must_use]
    pub fn posted_on_label(&self) -> String {
        self.posted_on().map_or_else(
            || "Unknown".to_owned(),
            |date| date.format("%d/%m/%Y").to_string(),
        )
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum HiringStatus {
    Hired,
    NotHired,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Severity {
    Affirmative,
    Negative,
}

impl HiringStatus {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Hired => "Hired",
            Self::NotHired => "Not Hired",
        }
    }

    #[must_use]
    pub const fn severity(self) -> Severity {
        match self {
            Self::Hired => Severity::Negative,
            Self::NotHired => Severity::Affirmative,
        }
    }
}

impl From<bool> for HiringStatus {
    fn from(hired: bool) -> Self {
        if hired { Self::Hired } else { Self::NotHired }
    }
}

impl Display for JobId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for JobId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

impl Display for RoleId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for RoleId {
    type Err = Report;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(eyre!("the provider's role ID cannot be blank"));
        }

        Ok(Self(trimmed.to_owned()))
    }
}

// Private Helper Code =================================================================================================

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn parse_posted_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();

    DateTime::parse_from_rfc3339(raw)
        .map(|timestamp| timestamp.date_naive())
        .or_else(|_| raw.parse::<NaiveDateTime>().map(|timestamp| timestamp.date()))
        .or_else(|_| raw.parse::<NaiveDate>())
        .ok()
}

// Unit Tests ==========================================================================================================

#[cfg(test)]
pub mod tests {
    use indoc::indoc;

    use super::*;

    pub fn job(id: u64, title: &str) -> JobRecord {
        JobRecord {
            job_id: JobId::new(id),
            title: title.to_owned(),
            ..JobRecord::default()
        }
    }

    #[test]
    fn deserialize_backend_record() {
        let record: JobRecord = serde_json::from_str(indoc! {r#"
            {
                "jobId": 12,
                "jobTitle": "Backend Engineer",
                "jobDescription": "Own the billing service",
                "jobExperience": "3+ years",
                "qualifiedEducation": "BSc Computer Science",
                "jobLocation": "Remote",
                "jobPostedDate": "2024-05-01T09:30:00",
                "isHired": true,
                "jobSkills": "Go, Rust, TypeScript"
            }
        "#})
        .unwrap();

        assert_eq!(record.job_id, JobId::new(12));
        assert_eq!(record.title, "Backend Engineer");
        assert_eq!(record.education, "BSc Computer Science");
        assert_eq!(record.status(), HiringStatus::Hired);
        assert_eq!(record.skills(), ["Go", "Rust", "TypeScript"]);
        assert_eq!(record.posted_on_label(), "01/05/2024");
    }

    #[test]
    fn deserialize_sparse_record() {
        let record: JobRecord = serde_json::from_str(indoc! {r#"
            {
                "jobId": 3,
                "jobTitle": null,
                "isHired": null,
                "jobSkills": null
            }
        "#})
        .unwrap();

        assert_eq!(record.job_id, JobId::new(3));
        assert_eq!(record.title, "");
        assert_eq!(record.status(), HiringStatus::NotHired);
        assert!(record.skills().is_empty());
        assert_eq!(record.posted_on(), None);
        assert_eq!(record.posted_on_label(), "Unknown");
    }

    #[test]
    fn skills() {
        let mut record = job(1, "Engineer");
        assert!(record.skills().is_empty());

        record.skills = "Go, Rust, TypeScript".to_owned();
        assert_eq!(record.skills(), ["Go", "Rust", "TypeScript"]);

        // Source order is kept and duplicates aren't removed
        record.skills = "SQL, Go, SQL".to_owned();
        assert_eq!(record.skills(), ["SQL", "Go", "SQL"]);

        // Only the exact separator splits
        record.skills = "C,C++".to_owned();
        assert_eq!(record.skills(), ["C,C++"]);
    }

    #[test]
    fn hiring_status() {
        assert_eq!(HiringStatus::from(true).label(), "Hired");
        assert_eq!(HiringStatus::from(true).severity(), Severity::Negative);
        assert_eq!(HiringStatus::from(false).label(), "Not Hired");
        assert_eq!(HiringStatus::from(false).severity(), Severity::Affirmative);
    }

    #[test]
    fn posted_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2023, 11, 7);
        for raw in [
            "2023-11-07T16:45:00Z",
            "2023-11-07T16:45:00+01:00",
            "2023-11-07T16:45:00",
            "2023-11-07T16:45:00.123",
            "2023-11-07",
        ] {
            assert_eq!(parse_posted_date(raw), expected, "{raw}");
        }

        assert_eq!(parse_posted_date("last Tuesday"), None);
        assert_eq!(parse_posted_date(""), None);
    }

    #[test]
    fn identifiers() {
        assert_eq!("42".parse::<JobId>().unwrap(), JobId::new(42));
        assert_eq!(JobId::new(42).to_string(), "42");
        assert!("forty-two".parse::<JobId>().is_err());

        assert_eq!(" 17 ".parse::<RoleId>().unwrap().as_str(), "17");
        assert_eq!(
            "   ".parse::<RoleId>().unwrap_err().to_string(),
            "the provider's role ID cannot be blank"
        );
    }
}
