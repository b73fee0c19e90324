use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::forms::tags::{AddTagForm, EditTagForm};
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::tags::{create_tag, get_tag, list_tags, modify_tag, remove_tag};

const ENTITY: &str = "tag";

#[get("/tags")]
pub async fn show_tags(repo: web::Data<DieselRepository>) -> impl Responder {
    match list_tags(repo.get_ref()) {
        Ok(tags) => HttpResponse::Ok().json(tags),
        Err(err) => error_response(ENTITY, "list tags", err),
    }
}

#[get("/tags/{tag_id}")]
pub async fn show_tag(path: web::Path<i32>, repo: web::Data<DieselRepository>) -> impl Responder {
    match get_tag(repo.get_ref(), path.into_inner()) {
        Ok(tag) => HttpResponse::Ok().json(tag),
        Err(err) => error_response(ENTITY, "load tag", err),
    }
}

#[post("/tags")]
pub async fn add_tag(
    repo: web::Data<DieselRepository>,
    form: web::Json<AddTagForm>,
) -> impl Responder {
    match create_tag(repo.get_ref(), form.into_inner()) {
        Ok(tag) => HttpResponse::Ok().json(tag),
        Err(err) => error_response(ENTITY, "create tag", err),
    }
}

#[put("/tags/{tag_id}")]
pub async fn edit_tag(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    form: web::Json<EditTagForm>,
) -> impl Responder {
    match modify_tag(repo.get_ref(), path.into_inner(), form.into_inner()) {
        Ok(tag) => HttpResponse::Ok().json(tag),
        Err(err) => error_response(ENTITY, "modify tag", err),
    }
}

#[delete("/tags/{tag_id}")]
pub async fn delete_tag(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match remove_tag(repo.get_ref(), path.into_inner()) {
        Ok(result) => HttpResponse::Ok().json(result),
        Err(err) => error_response(ENTITY, "delete tag", err),
    }
}
