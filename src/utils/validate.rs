use crate::error::{AppError, AppResult};
use axum::Json;
use axum::extract::{FromRequest, FromRequestParts, Query, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON body that has passed `validator` rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> AppResult<Self> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        value.validate()?;
        Ok(ValidatedJson(value))
    }
}

/// Query string that has passed `validator` rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> AppResult<Self> {
        let Query(value) = Query::<T>::from_request_parts(parts, state).await?;
        value.validate()?;
        Ok(ValidatedQuery(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Method, header};
    use serde::Deserialize;

    #[derive(Debug, Deserialize, Validate)]
    struct CallbackRequest {
        #[validate(length(min = 2, max = 100, message = "Name must be between 2 and 100 characters"))]
        name: String,
        #[validate(email(message = "Invalid email format"))]
        email: String,
        #[validate(range(min = 0, max = 10, message = "Urgency must be between 0 and 10"))]
        urgency: i32,
    }

    fn json_request(body: &str) -> Request {
        Request::builder()
            .method(Method::POST)
            .uri("/test")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_valid_json() {
        let request = json_request(r#"{"name":"Dana","email":"dana@example.com","urgency":4}"#);
        let ValidatedJson(body) = ValidatedJson::<CallbackRequest>::from_request(request, &())
            .await
            .unwrap();
        assert_eq!(body.name, "Dana");
        assert_eq!(body.email, "dana@example.com");
        assert_eq!(body.urgency, 4);
    }

    #[tokio::test]
    async fn test_rule_violations_collected() {
        let request = json_request(r#"{"name":"D","email":"nope","urgency":11}"#);
        match ValidatedJson::<CallbackRequest>::from_request(request, &()).await {
            Err(AppError::ValidationErrors { errors }) => {
                let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
                assert_eq!(fields, vec!["email", "name", "urgency"]);
                assert!(errors[2].message.contains("between 0 and 10"));
            }
            other => panic!("Expected ValidationErrors, got {:?}", other.map(|_| ())),
        }
    }

    #[tokio::test]
    async fn test_missing_field_is_bad_request() {
        let request = json_request(r#"{"name":"Dana","email":"dana@example.com"}"#);
        match ValidatedJson::<CallbackRequest>::from_request(request, &()).await {
            Err(AppError::BadRequest { message }) => assert!(!message.is_empty()),
            other => panic!("Expected BadRequest, got {:?}", other.map(|_| ())),
        }
    }

    #[tokio::test]
    async fn test_wrong_content_type_is_bad_request() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/test")
            .header(header::CONTENT_TYPE, "text/plain")
            .body(Body::from("name=Dana"))
            .unwrap();
        assert!(matches!(
            ValidatedJson::<CallbackRequest>::from_request(request, &()).await,
            Err(AppError::BadRequest { .. })
        ));
    }

    #[derive(Debug, Deserialize, Validate)]
    struct Window {
        #[validate(range(min = 1, max = 50, message = "Limit must be between 1 and 50"))]
        limit: u32,
    }

    async fn query(uri: &str) -> AppResult<ValidatedQuery<Window>> {
        let (mut parts, _) = Request::builder().uri(uri).body(()).unwrap().into_parts();
        ValidatedQuery::<Window>::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn test_query_validated() {
        let ValidatedQuery(window) = query("/x?limit=20").await.unwrap();
        assert_eq!(window.limit, 20);

        assert!(matches!(
            query("/x?limit=0").await,
            Err(AppError::ValidationErrors { .. })
        ));
        assert!(matches!(
            query("/x?limit=abc").await,
            Err(AppError::BadRequest { .. })
        ));
    }
}
