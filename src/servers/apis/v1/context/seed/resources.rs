use serde::{Deserialize, Serialize};

use crate::core::seed::SeedReport;

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct Seeded {
    pub message: String,
    pub destinations: usize,
    pub deals: usize,
    pub experiences: usize,
}

impl From<SeedReport> for Seeded {
    fn from(report: SeedReport) -> Self {
        Self {
            message: "Database seeded successfully".to_owned(),
            destinations: report.destinations,
            deals: report.deals,
            experiences: report.experiences,
        }
    }
}
