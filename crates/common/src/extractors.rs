//! Custom axum extractors for WASAText

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::Error;

/// JSON extractor that runs `validator` rules on the deserialized body.
///
/// Malformed JSON and rule violations both surface as 400 with the shared
/// error body, so handlers only ever see well-formed input.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

#[derive(Debug)]
pub enum ValidatedJsonRejection {
    Json(JsonRejection),
    Validation(Error),
}

impl IntoResponse for ValidatedJsonRejection {
    fn into_response(self) -> Response {
        match self {
            ValidatedJsonRejection::Json(e) => Error::Validation(e.body_text()).into_response(),
            ValidatedJsonRejection::Validation(e) => e.into_response(),
        }
    }
}

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ValidatedJsonRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(ValidatedJsonRejection::Json)?;
        value
            .validate()
            .map_err(|e| ValidatedJsonRejection::Validation(Error::Validation(describe(&e))))?;
        Ok(ValidatedJson(value))
    }
}

/// One line naming every rejected field and the rules it broke, sorted by
/// field so the message is stable.
fn describe(errors: &ValidationErrors) -> String {
    let mut fields: Vec<String> = errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let rules: Vec<&str> = errs.iter().map(|e| e.code.as_ref()).collect();
            format!("{} ({})", field, rules.join(", "))
        })
        .collect();
    fields.sort();
    format!("Invalid request body: {}", fields.join("; "))
}
