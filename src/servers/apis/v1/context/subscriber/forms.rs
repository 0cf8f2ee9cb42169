use serde::Deserialize;

pub const DEFAULT_LIST_LIMIT: u32 = 100;

#[derive(Deserialize, Debug, Default)]
pub struct ListQueryParams {
    pub skip: Option<u32>,
    pub limit: Option<u32>,
    pub active_only: Option<bool>,
}

#[derive(Deserialize, Debug, Default)]
pub struct CountQueryParams {
    pub active_only: Option<bool>,
}
