//! Author handlers.

use actix_web::{HttpResponse, http::header, web};

use blog_core::domain::Author;
use blog_shared::dto::{AuthorResponse, CreateAuthorRequest};

use crate::middleware::error::AppResult;
use crate::state::AppState;

pub(crate) fn author_response(author: &Author) -> AuthorResponse {
    AuthorResponse {
        id: author.id(),
        name: author.name().to_string(),
        surname: author.surname().to_string(),
        social_security_number: author.social_security_number().to_string(),
    }
}

/// POST /api/authors
pub async fn create_author(
    state: web::Data<AppState>,
    body: web::Json<CreateAuthorRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let author = state
        .authors
        .create_author(req.name, req.surname, req.social_security_number)
        .await?;

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/api/authors/{}", author.id())))
        .json(author_response(&author)))
}

/// GET /api/authors
pub async fn list_authors(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let authors = state.authors.list_authors().await?;
    let body: Vec<AuthorResponse> = authors.iter().map(author_response).collect();
    Ok(HttpResponse::Ok().json(body))
}
