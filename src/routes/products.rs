use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::forms::products::ProductForm;
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::products::{
    create_product, get_product, list_products, modify_product, remove_product,
};

const ENTITY: &str = "product";

#[get("/products")]
pub async fn show_products(repo: web::Data<DieselRepository>) -> impl Responder {
    match list_products(repo.get_ref()) {
        Ok(products) => HttpResponse::Ok().json(products),
        Err(err) => error_response(ENTITY, "list products", err),
    }
}

#[get("/products/{product_id}")]
/// Responds with `null` rather than 404 when the product does not exist.
pub async fn show_product(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match get_product(repo.get_ref(), path.into_inner()) {
        Ok(product) => HttpResponse::Ok().json(product),
        Err(err) => error_response(ENTITY, "load product", err),
    }
}

#[post("/products")]
pub async fn add_product(
    repo: web::Data<DieselRepository>,
    form: web::Json<ProductForm>,
) -> impl Responder {
    match create_product(repo.get_ref(), form.into_inner()) {
        Ok(created) => HttpResponse::Ok().json(created),
        Err(err) => error_response(ENTITY, "create product", err),
    }
}

#[put("/products/{product_id}")]
pub async fn edit_product(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    form: web::Json<ProductForm>,
) -> impl Responder {
    match modify_product(repo.get_ref(), path.into_inner(), form.into_inner()) {
        Ok(update) => HttpResponse::Ok().json(update),
        Err(err) => error_response(ENTITY, "modify product", err),
    }
}

#[delete("/products/{product_id}")]
pub async fn delete_product(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match remove_product(repo.get_ref(), path.into_inner()) {
        Ok(result) => HttpResponse::Ok().json(result),
        Err(err) => error_response(ENTITY, "delete product", err),
    }
}
