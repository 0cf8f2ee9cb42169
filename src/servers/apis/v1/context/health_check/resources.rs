//! API resources for the [`health_check`](crate::servers::apis::v1::context::health_check)
//! API context.
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub enum Status {
    Ok,
    Error,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseStatus {
    Connected,
    Unreachable,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct Report {
    pub status: Status,
    pub database: DatabaseStatus,
    pub version: String,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct ServiceInfo {
    pub name: String,
    pub version: String,
    pub status: String,
    /// Context name to path.
    pub endpoints: Map<String, Value>,
}
