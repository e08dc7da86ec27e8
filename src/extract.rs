//! Request body extraction
//!
//! Browsers post these forms as JSON, urlencoded or multipart `FormData`.
//! All three are flattened into one field map and then deserialized into the
//! variant's struct.

use crate::models::FormSubmission;
use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::rejection::{FormRejection, JsonRejection};
use axum::extract::{FromRequest, Multipart, Request};
use axum::http::header;
use axum::{Form, Json};
use serde_json::{Map, Value};
use std::convert::Infallible;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
enum BodyError {
    #[error("invalid JSON body: {0}")]
    Json(#[from] JsonRejection),

    #[error("invalid urlencoded body: {0}")]
    Form(#[from] FormRejection),

    #[error("invalid multipart body: {0}")]
    Multipart(#[from] MultipartRejection),

    #[error("invalid multipart field: {0}")]
    MultipartField(#[from] MultipartError),
}

/// A submission of variant `F`, whatever encoding it arrived in.
///
/// Never rejects: an unreadable body becomes an empty submission, which then
/// fails required-field validation like any other incomplete form.
#[derive(Debug)]
pub struct Submission<F>(pub F);

impl<F, S> FromRequest<S> for Submission<F>
where
    F: FormSubmission,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let fields = match read_fields(req, state).await {
            Ok(fields) => fields,
            Err(e) => {
                warn!("{} form body unreadable: {}", F::KIND, e);
                Map::new()
            }
        };

        let form = serde_json::from_value(Value::Object(fields)).unwrap_or_else(|e| {
            warn!("{} form fields unusable: {}", F::KIND, e);
            F::default()
        });

        Ok(Submission(form))
    }
}

async fn read_fields<S>(req: Request, state: &S) -> Result<Map<String, Value>, BodyError>
where
    S: Send + Sync,
{
    let content_type = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.split(';').next().unwrap_or_default().trim().to_ascii_lowercase())
        .unwrap_or_default();

    match content_type.as_str() {
        "application/json" => {
            let Json(fields) = Json::<Map<String, Value>>::from_request(req, state).await?;
            Ok(fields)
        }
        "application/x-www-form-urlencoded" => {
            let Form(pairs) = Form::<Vec<(String, String)>>::from_request(req, state).await?;
            Ok(pairs
                .into_iter()
                .map(|(name, value)| (name, Value::String(value)))
                .collect())
        }
        "multipart/form-data" => {
            let mut multipart = Multipart::from_request(req, state).await?;
            let mut fields = Map::new();
            while let Some(field) = multipart.next_field().await? {
                // Text fields only; uploads are not part of any form.
                if field.file_name().is_some() {
                    continue;
                }
                let Some(name) = field.name().map(str::to_owned) else {
                    continue;
                };
                fields.insert(name, Value::String(field.text().await?));
            }
            Ok(fields)
        }
        _ => Ok(Map::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ContactSubmission, OrderSubmission};
    use axum::body::Body;
    use pretty_assertions::assert_eq;

    async fn extract<F: FormSubmission>(content_type: Option<&str>, body: &str) -> F {
        let mut builder = axum::http::Request::builder().method("POST").uri("/");
        if let Some(ct) = content_type {
            builder = builder.header(header::CONTENT_TYPE, ct);
        }
        let req = builder.body(Body::from(body.to_string())).unwrap();
        let Submission(form) = Submission::<F>::from_request(req, &()).await.unwrap();
        form
    }

    #[tokio::test]
    async fn test_json_body() {
        let form: ContactSubmission = extract(
            Some("application/json"),
            r#"{"name":"Alice","email":"a@x.com","message":"Hi"}"#,
        )
        .await;
        assert_eq!(form.name.as_deref(), Some("Alice"));
        assert_eq!(form.message.as_deref(), Some("Hi"));
    }

    #[tokio::test]
    async fn test_json_with_charset() {
        let form: ContactSubmission = extract(
            Some("application/json; charset=utf-8"),
            r#"{"name":"Alice"}"#,
        )
        .await;
        assert_eq!(form.name.as_deref(), Some("Alice"));
    }

    #[tokio::test]
    async fn test_urlencoded_body() {
        let form: OrderSubmission = extract(
            Some("application/x-www-form-urlencoded"),
            "name=Carol&email=c%40x.com&quantity=2&callBackTime=after+5pm",
        )
        .await;
        assert_eq!(form.email.as_deref(), Some("c@x.com"));
        assert_eq!(form.call_back_time.as_deref(), Some("after 5pm"));
        assert_eq!(form.phone, None);
    }

    #[tokio::test]
    async fn test_multipart_body() {
        let body = "--XBOUNDARY\r\n\
             Content-Disposition: form-data; name=\"name\"\r\n\r\n\
             Alice\r\n\
             --XBOUNDARY\r\n\
             Content-Disposition: form-data; name=\"attachment\"; filename=\"a.txt\"\r\n\
             Content-Type: text/plain\r\n\r\n\
             ignored\r\n\
             --XBOUNDARY\r\n\
             Content-Disposition: form-data; name=\"message\"\r\n\r\n\
             Hi there\r\n\
             --XBOUNDARY--\r\n";
        let form: ContactSubmission =
            extract(Some("multipart/form-data; boundary=XBOUNDARY"), body).await;

        assert_eq!(form.name.as_deref(), Some("Alice"));
        assert_eq!(form.message.as_deref(), Some("Hi there"));
        assert_eq!(form.email, None);
    }

    #[tokio::test]
    async fn test_malformed_json_is_empty_submission() {
        let form: ContactSubmission = extract(Some("application/json"), "{not json").await;
        assert_eq!(form.name, None);
    }

    #[tokio::test]
    async fn test_missing_content_type_is_empty_submission() {
        let form: ContactSubmission = extract(None, "name=Alice").await;
        assert_eq!(form.name, None);
    }
}
