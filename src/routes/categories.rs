use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::forms::categories::CategoryForm;
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::categories::{
    create_category, get_category, list_categories, modify_category, remove_category,
};

const ENTITY: &str = "category";

#[get("/categories")]
pub async fn show_categories(repo: web::Data<DieselRepository>) -> impl Responder {
    match list_categories(repo.get_ref()) {
        Ok(categories) => HttpResponse::Ok().json(categories),
        Err(err) => error_response(ENTITY, "list categories", err),
    }
}

#[get("/categories/{category_id}")]
pub async fn show_category(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match get_category(repo.get_ref(), path.into_inner()) {
        Ok(category) => HttpResponse::Ok().json(category),
        Err(err) => error_response(ENTITY, "load category", err),
    }
}

#[post("/categories")]
pub async fn add_category(
    repo: web::Data<DieselRepository>,
    form: web::Json<CategoryForm>,
) -> impl Responder {
    match create_category(repo.get_ref(), form.into_inner()) {
        Ok(category) => HttpResponse::Ok().json(category),
        Err(err) => error_response(ENTITY, "create category", err),
    }
}

#[put("/categories/{category_id}")]
pub async fn edit_category(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    form: web::Json<CategoryForm>,
) -> impl Responder {
    match modify_category(repo.get_ref(), path.into_inner(), form.into_inner()) {
        Ok(category) => HttpResponse::Ok().json(category),
        Err(err) => error_response(ENTITY, "modify category", err),
    }
}

#[delete("/categories/{category_id}")]
pub async fn delete_category(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match remove_category(repo.get_ref(), path.into_inner()) {
        Ok(result) => HttpResponse::Ok().json(result),
        Err(err) => error_response(ENTITY, "delete category", err),
    }
}
