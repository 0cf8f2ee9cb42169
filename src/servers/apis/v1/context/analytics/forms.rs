use serde::Deserialize;

#[derive(Deserialize, Debug, Default)]
pub struct PeriodQueryParams {
    pub days: Option<u32>,
}

#[derive(Deserialize, Debug, Default)]
pub struct LimitQueryParams {
    pub limit: Option<u32>,
}

#[derive(Deserialize, Debug)]
pub struct EmailQueryParams {
    pub email: String,
}
