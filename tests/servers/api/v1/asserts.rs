use reqwest::Response;
use serde::de::DeserializeOwned;
use tripcompare::servers::apis::v1::responses::{ActionStatus, ErrorDetail};

// Resource responses

pub async fn assert_json<T: DeserializeOwned>(response: Response) -> T {
    assert_eq!(response.status(), 200);
    assert_eq!(response.headers().get("content-type").unwrap(), "application/json");
    response.json::<T>().await.unwrap()
}

pub async fn assert_created<T: DeserializeOwned>(response: Response) -> T {
    assert_eq!(response.status(), 201);
    assert_eq!(response.headers().get("content-type").unwrap(), "application/json");
    response.json::<T>().await.unwrap()
}

// OK response

pub async fn assert_ok(response: Response, message: &str) {
    let response_status = response.status();
    let response_text = response.text().await.unwrap();

    let details = format!(
        r#"
   status: ´{response_status}´
     text: ´"{response_text}"´"#
    );

    assert_eq!(response_status, 200, "details:{details}.");
    assert_eq!(
        serde_json::from_str::<ActionStatus>(&response_text).unwrap(),
        ActionStatus {
            message: message.to_owned(),
            success: true,
        },
        "\ndetails:{details}."
    );
}

// Error responses

async fn assert_error(response: Response, status: u16, detail: &str) {
    assert_eq!(response.status(), status);
    assert_eq!(response.headers().get("content-type").unwrap(), "application/json");
    assert_eq!(
        response.json::<ErrorDetail>().await.unwrap(),
        ErrorDetail {
            detail: detail.to_owned()
        }
    );
}

/// Any `400` with a JSON detail containing the given text.
pub async fn assert_bad_request_containing(response: Response, text: &str) {
    assert_eq!(response.status(), 400);
    let error = response.json::<ErrorDetail>().await.unwrap();
    assert!(
        error.detail.contains(text),
        "expected ´{text}´ in the error detail ´{}´",
        error.detail
    );
}

pub async fn assert_bad_request(response: Response, detail: &str) {
    assert_error(response, 400, detail).await;
}

pub async fn assert_unprocessable_content(response: Response) {
    assert_eq!(response.status(), 422);
}

pub async fn assert_not_found(response: Response, detail: &str) {
    assert_error(response, 404, detail).await;
}

pub async fn assert_forbidden(response: Response, detail: &str) {
    assert_error(response, 403, detail).await;
}

pub async fn assert_token_not_valid(response: Response) {
    assert_error(response, 401, "token not valid").await;
}

pub async fn assert_unauthorized(response: Response) {
    assert_error(response, 401, "unauthorized").await;
}

pub async fn assert_internal_server_error(response: Response) {
    assert_error(response, 500, "Internal server error").await;
}

pub async fn assert_status(response: Response, status: u16) {
    assert_eq!(response.status(), status);
}
