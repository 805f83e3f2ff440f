//! Logical resources exposed by the dashboard API
//!
//! A [`Resource`] names one collection the orchestrator can request and
//! knows how to build its path and query string. The centers listing
//! carries its own filter and pagination parameters so each page of the
//! dashboard can request exactly the slice it needs.

use crate::config::ApiConfig;
use std::fmt;

/// One fetchable collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resource {
    /// Pre-aggregated statistics (`/Dashboard/stats`)
    Stats,
    /// Blood-donation requests (`/BloodDonationRequests`)
    Requests,
    /// Transfusion centers with inventories (`/BTC`)
    Centers {
        wilaya_id: Option<u32>,
        take: u32,
        skip: u32,
    },
    /// Administrative regions (`/Wilayas`)
    Wilayas,
    /// Registered donors (`/users`)
    Donors,
}

impl Resource {
    /// Short name used in logs and error messages
    pub fn name(&self) -> &'static str {
        match self {
            Resource::Stats => "stats",
            Resource::Requests => "requests",
            Resource::Centers { .. } => "centers",
            Resource::Wilayas => "wilayas",
            Resource::Donors => "donors",
        }
    }

    /// Path and query string relative to the API base URL
    pub fn path_and_query(&self) -> String {
        match self {
            Resource::Stats => "/Dashboard/stats".to_string(),
            Resource::Requests => "/BloodDonationRequests".to_string(),
            Resource::Centers {
                wilaya_id,
                take,
                skip,
            } => {
                let mut path = String::from("/BTC?");
                if let Some(id) = wilaya_id {
                    path.push_str(&format!("wilayaId={id}&"));
                }
                path.push_str(&format!(
                    "paginationTake={take}&paginationSkip={skip}&level=0"
                ));
                path
            }
            Resource::Wilayas => "/Wilayas".to_string(),
            Resource::Donors => "/users?level=1".to_string(),
        }
    }

    /// Centers resource parameterized from configuration
    pub fn centers_from_config(config: &ApiConfig) -> Resource {
        Resource::Centers {
            wilaya_id: config.wilaya_id,
            take: config.pagination_take,
            skip: config.pagination_skip,
        }
    }

    /// The full resource set a complete dashboard cycle needs
    pub fn full_set(config: &ApiConfig) -> Vec<Resource> {
        vec![
            Resource::Stats,
            Resource::Requests,
            Resource::centers_from_config(config),
            Resource::Wilayas,
            Resource::Donors,
        ]
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
