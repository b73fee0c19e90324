use actix_web::{HttpResponse, error, web};
use serde::{Deserialize, Serialize};

use crate::services::ServiceError;

pub mod categories;
pub mod products;
pub mod tags;

/// Body of every error response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub message: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Register every route together with the extractor error handlers.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(path_config())
        .service(categories::show_categories)
        .service(categories::show_category)
        .service(categories::add_category)
        .service(categories::edit_category)
        .service(categories::delete_category)
        .service(products::show_products)
        .service(products::show_product)
        .service(products::add_product)
        .service(products::edit_product)
        .service(products::delete_product)
        .service(tags::show_tags)
        .service(tags::show_tag)
        .service(tags::add_tag)
        .service(tags::edit_tag)
        .service(tags::delete_tag);
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let response = HttpResponse::BadRequest().json(ErrorBody::new(err.to_string()));
        error::InternalError::from_response(err, response).into()
    })
}

fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, _req| {
        let response = HttpResponse::BadRequest().json(ErrorBody::new(err.to_string()));
        error::InternalError::from_response(err, response).into()
    })
}

/// Map a service failure to the uniform error policy.
///
/// `entity` names the record in the not-found message, `action` is only logged.
pub(crate) fn error_response(entity: &str, action: &str, err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::NotFound => HttpResponse::NotFound().json(ErrorBody::new(format!(
            "No {entity} with specified id found."
        ))),
        ServiceError::Form(message) => HttpResponse::BadRequest().json(ErrorBody::new(message)),
        ServiceError::Conflict(message) => {
            log::warn!("Rejected attempt to {action}: {message}");
            HttpResponse::BadRequest().json(ErrorBody::new(message))
        }
        ServiceError::Internal(message) => {
            log::error!("Failed to {action}: {message}");
            HttpResponse::InternalServerError().json(ErrorBody::new("Internal server error."))
        }
    }
}
