//! URL query strings for the API requests.
use serde::Serialize;

/// Query string sent with a request. Repeated names are kept in order.
#[derive(Serialize, Default, Debug, Clone)]
#[serde(transparent)]
pub struct Query(Vec<(String, String)>);

impl Query {
    pub fn params(params: Vec<QueryParam>) -> Self {
        Self(params.into_iter().map(|param| (param.name, param.value)).collect())
    }

    /// A query with a single param.
    pub fn with(name: &str, value: &str) -> Self {
        Self::params(vec![QueryParam::new(name, value)])
    }

    pub fn add_param(&mut self, param: QueryParam) {
        self.0.push((param.name, param.value));
    }
}

/// A `name=value` pair of the query string.
#[derive(Clone, Debug)]
pub struct QueryParam {
    name: String,
    value: String,
}

impl QueryParam {
    pub fn new(name: &str, value: &str) -> Self {
        Self {
            name: name.to_owned(),
            value: value.to_owned(),
        }
    }

    pub fn token(value: &str) -> Self {
        Self::new("token", value)
    }
}
