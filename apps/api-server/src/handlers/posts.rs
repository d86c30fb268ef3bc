//! Post handlers.

use actix_web::{HttpResponse, http::header, web};

use blog_core::domain::Post;
use blog_shared::dto::{
    CreatePostRequest, GetPostQuery, PostResponse, UpdateContentRequest, UpdateTitleRequest,
};

use super::authors::author_response;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn post_response(post: &Post) -> PostResponse {
    PostResponse {
        id: post.id(),
        author_id: post.author_id(),
        title: post.title().to_string(),
        description: post.description().to_string(),
        content: post.content().to_string(),
        created_at: post.created_at(),
        author: post.author().map(author_response),
    }
}

/// POST /api/posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let post = state
        .posts
        .create_post(req.title, req.description, req.content, req.author_id)
        .await?;

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/api/posts/{}", post.id())))
        .json(post_response(&post)))
}

/// GET /api/posts/{id}?includeAuthor=bool
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    query: web::Query<GetPostQuery>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    match state.posts.get_post(id, query.include_author).await? {
        Some(post) => Ok(HttpResponse::Ok().json(post_response(&post))),
        None => Err(AppError::NotFound(format!("Post with ID {id} not found"))),
    }
}

/// GET /api/posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list_posts().await?;
    let body: Vec<PostResponse> = posts.iter().map(post_response).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// PUT /api/posts/{id}/content
pub async fn update_content(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    body: web::Json<UpdateContentRequest>,
) -> AppResult<HttpResponse> {
    state
        .posts
        .update_post_content(path.into_inner(), body.into_inner().content)
        .await?;

    Ok(HttpResponse::NoContent().finish())
}

/// PUT /api/posts/{id}/title
pub async fn update_title(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    body: web::Json<UpdateTitleRequest>,
) -> AppResult<HttpResponse> {
    state
        .posts
        .update_post_title(path.into_inner(), body.into_inner().title)
        .await?;

    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use actix_web::{App, http::StatusCode, test, web};
    use blog_shared::ErrorResponse;
    use blog_shared::dto::PostResponse;
    use serde_json::json;

    use super::*;
    use crate::handlers::configure_routes;

    /// In-memory state holding Author("Ellen", "Sano") with id 1.
    async fn state_with_author() -> AppState {
        let state = AppState::in_memory();
        let author = state
            .authors
            .create_author("Ellen", "Sano", "12345678901")
            .await
            .unwrap();
        assert_eq!(author.id(), 1);
        state
    }

    /// Same as [`state_with_author`], plus one post (id 1) by that author.
    async fn state_with_post() -> (AppState, PostResponse) {
        let state = state_with_author().await;
        let post = state
            .posts
            .create_post("Test Post", "Test Description", "Test Content", 1)
            .await
            .unwrap();
        (state, post_response(&post))
    }

    #[actix_web::test]
    async fn test_create_post_for_existing_author() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state_with_author().await))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .set_json(json!({
                "title": "Test Post",
                "description": "Test Description",
                "content": "Test Content",
                "authorId": 1
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::CREATED);
        assert_eq!(
            resp.headers().get(header::LOCATION).unwrap(),
            "/api/posts/1"
        );

        let post: PostResponse = test::read_body_json(resp).await;
        assert_eq!(post.author_id, 1);
        assert_eq!(post.author.map(|a| a.name), Some("Ellen".to_string()));
    }

    #[actix_web::test]
    async fn test_create_post_for_missing_author_is_not_found() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state_with_author().await))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .set_json(json!({
                "title": "Test Post",
                "description": "Test Description",
                "content": "Test Content",
                "authorId": 999
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let problem: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(problem.detail.as_deref(), Some("Author with ID 999 not found"));

        let req = test::TestRequest::get().uri("/api/posts").to_request();
        let posts: Vec<PostResponse> = test::call_and_read_body_json(&app, req).await;
        assert!(posts.is_empty());
    }

    #[actix_web::test]
    async fn test_create_post_with_title_too_long_is_rejected() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state_with_author().await))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .set_json(json!({
                "title": "a".repeat(201),
                "content": "Test Content",
                "authorId": 1
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let problem: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(
            problem.detail.as_deref(),
            Some("Title cannot be longer than 200 characters")
        );
    }

    #[actix_web::test]
    async fn test_get_post_honours_include_author() {
        let (state, created) = state_with_post().await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/posts/{}", created.id))
            .to_request();
        let post: PostResponse = test::call_and_read_body_json(&app, req).await;
        assert!(post.author.is_some());

        let req = test::TestRequest::get()
            .uri(&format!("/api/posts/{}?includeAuthor=false", created.id))
            .to_request();
        let post: PostResponse = test::call_and_read_body_json(&app, req).await;
        assert!(post.author.is_none());
        assert_eq!(post.author_id, 1);
    }

    #[actix_web::test]
    async fn test_get_missing_post_is_not_found() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(AppState::in_memory()))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/posts/999").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_update_content_with_empty_content_keeps_previous_value() {
        let (state, created) = state_with_post().await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::put()
            .uri(&format!("/api/posts/{}/content", created.id))
            .set_json(json!({ "content": "" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let problem: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(problem.detail.as_deref(), Some("Content cannot be empty"));

        let req = test::TestRequest::get()
            .uri(&format!("/api/posts/{}", created.id))
            .to_request();
        let post: PostResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(post.content, "Test Content");
    }

    #[actix_web::test]
    async fn test_update_content_and_title() {
        let (state, created) = state_with_post().await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::put()
            .uri(&format!("/api/posts/{}/content", created.id))
            .set_json(json!({ "content": "Updated Content" }))
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::NO_CONTENT
        );

        let req = test::TestRequest::put()
            .uri(&format!("/api/posts/{}/title", created.id))
            .set_json(json!({ "title": "Updated Title" }))
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::NO_CONTENT
        );

        let req = test::TestRequest::get()
            .uri(&format!("/api/posts/{}", created.id))
            .to_request();
        let post: PostResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(post.title, "Updated Title");
        assert_eq!(post.content, "Updated Content");
        assert_eq!(post.description, "Test Description");
        assert_eq!(post.created_at, created.created_at);
    }

    #[actix_web::test]
    async fn test_update_missing_post_is_not_found() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(AppState::in_memory()))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/posts/999/title")
            .set_json(json!({ "title": "Updated Title" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let problem: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(problem.detail.as_deref(), Some("Post with ID 999 not found"));
    }

    #[actix_web::test]
    async fn test_malformed_json_is_bad_request() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(AppState::in_memory()))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .insert_header(header::ContentType::json())
            .set_payload("{not json")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_invalid_query_and_path_are_problem_details() {
        let (state, created) = state_with_post().await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/posts/{}?includeAuthor=yes", created.id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let problem: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(problem.status, 400);
        assert!(problem.detail.is_some());

        let req = test::TestRequest::get().uri("/api/posts/abc").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let problem: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(problem.status, 400);
    }
}
