use serde::Deserialize;

#[derive(Deserialize, Debug, Default)]
pub struct ListQueryParams {
    pub skip: Option<u32>,
    pub limit: Option<u32>,
    pub destination_id: Option<i64>,
    pub category: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
pub struct LimitQueryParams {
    pub limit: Option<u32>,
}
