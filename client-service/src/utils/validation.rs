use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use service_core::error::AppError;
use validator::Validate;

/// JSON body extractor that runs `Validate` before the handler sees the value.
///
/// Malformed JSON is a 400; a well-formed body of the wrong shape or one that
/// fails validation is a 422.
pub struct ValidatedJson<T>(pub T);

#[axum::async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + 'static,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| match rejection {
                JsonRejection::JsonDataError(e) => {
                    AppError::UnprocessableEntity(anyhow::anyhow!(e.body_text()))
                }
                other => AppError::BadRequest(anyhow::anyhow!(
                    "Json parse error: {}",
                    other.body_text()
                )),
            })?;

        value.validate()?;

        Ok(ValidatedJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dtos::CreateClientRequest;
    use axum::{body::Body, http::header::CONTENT_TYPE, http::StatusCode};
    use axum::http::Request as HttpRequest;

    fn json_request(body: &'static str) -> Request {
        HttpRequest::builder()
            .method("POST")
            .uri("/clients")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    async fn extract(body: &'static str) -> Result<CreateClientRequest, AppError> {
        ValidatedJson::<CreateClientRequest>::from_request(json_request(body), &())
            .await
            .map(|ValidatedJson(v)| v)
    }

    #[tokio::test]
    async fn syntax_error_is_bad_request() {
        let err = extract("{\"first_name\": ").await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn wrong_field_type_is_unprocessable() {
        let err = extract(r#"{"first_name": 42}"#).await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn invalid_email_is_unprocessable() {
        let err = extract(
            r#"{"first_name":"Juan","last_name":"Perez","email":"not-an-email","gender":"Male","address":"Calle principal 1234"}"#,
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }

    #[tokio::test]
    async fn valid_body_is_extracted() {
        let req = extract(
            r#"{"first_name":"Juan","last_name":"Perez","email":"juan.perez@acme.com","gender":"Male","address":"Calle principal 1234"}"#,
        )
        .await
        .unwrap();
        assert_eq!(req.email.as_deref(), Some("juan.perez@acme.com"));
    }
}
