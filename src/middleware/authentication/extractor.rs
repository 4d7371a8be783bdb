use crate::helpers::JsonResponse;
use crate::models;
use actix_web::dev::Payload;
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use std::future::{ready, Ready};
use std::ops::Deref;
use std::sync::Arc;

/// Extractor for routes that require a signed-in caller. Yields 401 when
/// the manager resolved the request as anonymous.
pub struct Authenticated(Arc<models::User>);

impl Authenticated {
    pub fn into_inner(self) -> Arc<models::User> {
        self.0
    }
}

impl Deref for Authenticated {
    type Target = models::User;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequest for Authenticated {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let user = req.extensions().get::<Arc<models::User>>().cloned();
        ready(match user {
            Some(user) => Ok(Authenticated(user)),
            None => Err(JsonResponse::<()>::build().unauthorized("Authentication required")),
        })
    }
}
