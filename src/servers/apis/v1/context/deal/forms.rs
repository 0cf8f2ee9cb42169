use serde::Deserialize;
use tripcompare_primitives::deal_type::DealType;

#[derive(Deserialize, Debug, Default)]
pub struct ListQueryParams {
    pub skip: Option<u32>,
    pub limit: Option<u32>,
    pub deal_type: Option<DealType>,
    pub featured_only: Option<bool>,
}

#[derive(Deserialize, Debug, Default)]
pub struct LimitQueryParams {
    pub limit: Option<u32>,
}
