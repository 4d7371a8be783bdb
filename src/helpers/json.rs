use actix_web::error::InternalError;
use actix_web::http::StatusCode;
use actix_web::{web, Error, HttpResponse};
use serde_derive::Serialize;

#[derive(Serialize)]
pub(crate) struct JsonResponse<T> {
    pub(crate) status: String,
    pub(crate) message: String,
    pub(crate) code: u16,
    pub(crate) id: Option<i32>,
    pub(crate) item: Option<T>,
    pub(crate) list: Option<Vec<T>>,
}

pub struct JsonResponseBuilder<T>
where
    T: serde::Serialize,
{
    id: Option<i32>,
    item: Option<T>,
    list: Option<Vec<T>>,
}

impl<T> JsonResponse<T>
where
    T: serde::Serialize,
{
    pub(crate) fn build() -> JsonResponseBuilder<T> {
        JsonResponseBuilder {
            id: None,
            item: None,
            list: None,
        }
    }
}

impl<T> JsonResponseBuilder<T>
where
    T: serde::Serialize,
{
    pub(crate) fn set_id(mut self, id: i32) -> Self {
        self.id = Some(id);
        self
    }

    pub(crate) fn set_item(mut self, item: T) -> Self {
        self.item = Some(item);
        self
    }

    pub(crate) fn set_list(mut self, list: Vec<T>) -> Self {
        self.list = Some(list);
        self
    }

    fn body(self, code: StatusCode, message: &str) -> JsonResponse<T> {
        JsonResponse {
            status: if code.is_success() { "OK" } else { "Error" }.to_string(),
            message: message.to_string(),
            code: code.as_u16(),
            id: self.id,
            item: self.item,
            list: self.list,
        }
    }

    pub(crate) fn ok(self, message: impl ToString) -> web::Json<JsonResponse<T>> {
        web::Json(self.body(StatusCode::OK, &message.to_string()))
    }

    pub(crate) fn created(self, message: impl ToString) -> HttpResponse {
        HttpResponse::Created().json(self.body(StatusCode::CREATED, &message.to_string()))
    }

    fn error(self, code: StatusCode, message: impl ToString) -> Error {
        let message = message.to_string();
        let body = self.body(code, &message);
        InternalError::from_response(message, HttpResponse::build(code).json(body)).into()
    }

    pub(crate) fn bad_request(self, message: impl ToString) -> Error {
        self.error(StatusCode::BAD_REQUEST, message)
    }

    pub(crate) fn unauthorized(self, message: impl ToString) -> Error {
        self.error(StatusCode::UNAUTHORIZED, message)
    }

    pub(crate) fn forbidden(self, message: impl ToString) -> Error {
        self.error(StatusCode::FORBIDDEN, message)
    }

    pub(crate) fn not_found(self, message: impl ToString) -> Error {
        self.error(StatusCode::NOT_FOUND, message)
    }

    pub(crate) fn internal_server_error(self, message: impl ToString) -> Error {
        let message = message.to_string();
        let message = if message.trim().is_empty() {
            "Internal Server Error".to_string()
        } else {
            message
        };
        self.error(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_builders_carry_the_status_code() {
        let resp = JsonResponse::<()>::build()
            .not_found("Object not found")
            .error_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let resp = JsonResponse::<()>::build().bad_request("bad").error_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = JsonResponse::<()>::build().forbidden("no").error_response();
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn empty_internal_error_message_gets_a_default() {
        let err = JsonResponse::<()>::build().internal_server_error("");
        assert_eq!(err.to_string(), "Internal Server Error");
    }
}
