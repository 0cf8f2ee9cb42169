use serde::Deserialize;

pub const DEFAULT_LIST_LIMIT: u32 = 100;

#[derive(Deserialize, Debug, Default)]
pub struct ListQueryParams {
    pub skip: Option<u32>,
    pub limit: Option<u32>,
    pub featured_only: Option<bool>,
}

#[derive(Deserialize, Debug)]
pub struct SearchQueryParams {
    pub q: String,
    pub limit: Option<u32>,
}

#[derive(Deserialize, Debug, Default)]
pub struct LimitQueryParams {
    pub limit: Option<u32>,
}
