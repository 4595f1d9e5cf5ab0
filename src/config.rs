// Standard Library Imports
use std::ffi::OsString;

// External Crate Imports
use clap::Parser;
use color_eyre::{Result, eyre::WrapErr};
use reqwest::Url;

// Local Crate Imports
use crate::job::RoleId;

// Public API ==========================================================================================================

pub const DEFAULT_API_URL: &str = "http://localhost:8081";

#[derive(Clone, Debug, Eq, PartialEq, Parser)]
#[command(
    name = "posted-jobs",
    about = "Review, edit, and delete the jobs you've posted",
    version
)]
pub struct Config {
    /// Base URL of the job-provider API
    #[arg(long, env = "POSTED_JOBS_API_URL", default_value = DEFAULT_API_URL, value_parser = parse_api_url)]
    pub api_url: Url,

    /// Role ID of the signed-in job provider
    #[arg(long, env = "POSTED_JOBS_ROLE_ID", value_parser = parse_role_id)]
    pub role_id: RoleId,

    /// Log level or filter, used when `RUST_LOG` isn't set
    #[arg(long, env = "POSTED_JOBS_LOG", default_value = "info")]
    pub log_level: String,
}

impl Config {
    /// Reads the configuration from the command line and environment, after loading any `.env` file in the working
    /// directory. Exits with a usage message if the arguments are invalid
    pub fn load() -> Result<Self> {
        match dotenvy::dotenv() {
            Err(error) if !error.not_found() => {
                return Err(error).wrap_err("failed to load the `.env` file");
            }
            _ => {}
        }

        Ok(Self::parse())
    }

    pub fn try_from_args<I, T>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::try_parse_from(args).wrap_err("invalid configuration")
    }
}

// Private Helper Code =================================================================================================

fn parse_api_url(raw: &str) -> Result<Url, String> {
    let url = Url::parse(raw).map_err(|error| format!("`{raw}` isn't a valid URL: {error}"))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(format!("`{raw}` must be an http:// or https:// URL"));
    }

    Ok(url)
}

fn parse_role_id(raw: &str) -> Result<RoleId, String> {
    raw.parse().map_err(|report| format!("{report}"))
}

// Unit Tests ==========================================================================================================
