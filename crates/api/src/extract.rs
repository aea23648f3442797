//! Request extractors.

use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;
use storefront_core::error::CoreError;
use validator::Validate;

use crate::error::AppError;

/// JSON body that must deserialize into `T` and pass `T::validate()`.
///
/// Malformed JSON, unknown fields and ill-typed values are rejected with
/// [`AppError::BadRequest`]; failed field rules with
/// [`CoreError::Validation`].
///
/// Take it as `Result<ValidJson<T>, AppError>` to tag the rejection with the
/// handler's operation message:
///
/// ```ignore
/// async fn create(body: Result<ValidJson<NewProduct>, AppError>) -> AppResult<..> {
///     let ValidJson(input) = body.during("Error creating the product")?;
///     ...
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ValidJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        value
            .validate()
            .map_err(|errors| AppError::Core(CoreError::Validation(errors.to_string())))?;

        Ok(Self(value))
    }
}
