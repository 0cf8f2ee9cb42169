use reqwest::Response;
use serde::Serialize;

use crate::common::http::{Query, QueryParam};
use crate::servers::api::connection_info::ConnectionInfo;

/// API Client
pub struct Client {
    connection_info: ConnectionInfo,
    base_path: String,
}

impl Client {
    pub fn new(connection_info: ConnectionInfo) -> Self {
        Self {
            connection_info,
            base_path: "/api/v1/".to_string(),
        }
    }

    pub async fn subscribe<T: Serialize + ?Sized>(&self, form: &T) -> Response {
        self.post_json("subscribers", form).await
    }

    pub async fn get_subscriber(&self, email: &str) -> Response {
        self.get(&format!("subscribers/{email}"), Query::default()).await
    }

    pub async fn unsubscribe(&self, email: &str) -> Response {
        self.delete(&format!("subscribers/{email}"), Query::default()).await
    }

    pub async fn create_destination<T: Serialize + ?Sized>(&self, form: &T) -> Response {
        self.post_json("destinations", form).await
    }

    pub async fn create_deal<T: Serialize + ?Sized>(&self, form: &T) -> Response {
        self.post_json("deals", form).await
    }

    pub async fn create_experience<T: Serialize + ?Sized>(&self, form: &T) -> Response {
        self.post_json("experiences", form).await
    }

    pub async fn seed(&self) -> Response {
        self.post_empty("seed").await
    }

    /// GET request with the admin token, when there is one.
    pub async fn get(&self, path: &str, params: Query) -> Response {
        let mut query: Query = params;

        if let Some(token) = &self.connection_info.admin_token {
            query.add_param(QueryParam::token(token));
        };

        self.get_request_with_query(path, query).await
    }

    pub async fn post_empty(&self, path: &str) -> Response {
        reqwest::Client::new()
            .post(self.base_url(path).clone())
            .query(&self.query_with_token())
            .send()
            .await
            .unwrap()
    }

    pub async fn post_json<T: Serialize + ?Sized>(&self, path: &str, form: &T) -> Response {
        reqwest::Client::new()
            .post(self.base_url(path).clone())
            .query(&self.query_with_token())
            .json(&form)
            .send()
            .await
            .unwrap()
    }

    pub async fn patch_json<T: Serialize + ?Sized>(&self, path: &str, form: &T) -> Response {
        reqwest::Client::new()
            .patch(self.base_url(path).clone())
            .query(&self.query_with_token())
            .json(&form)
            .send()
            .await
            .unwrap()
    }

    pub async fn delete(&self, path: &str, params: Query) -> Response {
        let mut query: Query = params;

        if let Some(token) = &self.connection_info.admin_token {
            query.add_param(QueryParam::token(token));
        };

        reqwest::Client::new()
            .delete(self.base_url(path).clone())
            .query(&query)
            .send()
            .await
            .unwrap()
    }

    pub async fn get_request_with_query(&self, path: &str, params: Query) -> Response {
        get(&self.base_url(path), Some(params)).await
    }

    pub async fn get_request(&self, path: &str) -> Response {
        get(&self.base_url(path), None).await
    }

    fn query_with_token(&self) -> Query {
        match &self.connection_info.admin_token {
            Some(token) => Query::params([QueryParam::token(token)].to_vec()),
            None => Query::default(),
        }
    }

    fn base_url(&self, path: &str) -> String {
        format!("http://{}{}{path}", &self.connection_info.bind_address, &self.base_path)
    }
}

pub async fn get(url: &str, query: Option<Query>) -> Response {
    let request = reqwest::Client::new().get(url);

    let request = match query {
        Some(query) => request.query(&query),
        None => request,
    };

    request.send().await.unwrap()
}
