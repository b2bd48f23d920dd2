// src/web/mod.rs
use std::io;

use actix_cors::Cors;
use actix_web::http::header::ContentType;
use actix_web::{web, App, HttpResponse, HttpServer};
use thiserror::Error;

// The whole UI ships as one self-contained document, form and generator
// logic included.
static INDEX_HTML: &str = include_str!("../../assets/index.html");

#[derive(Debug, Error)]
pub enum WebError {
    #[error("failed to bind {addr}: {source}")]
    Bind { addr: String, source: io::Error },

    #[error("server error: {0}")]
    Io(#[from] io::Error),
}

async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(INDEX_HTML)
}

pub async fn start_server(address: &str, port: u16) -> Result<(), WebError> {
    log::info!("Starting passgen web server on {}:{}", address, port);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET"])
            .max_age(3600);

        App::new()
            .wrap(cors)
            .route("/", web::get().to(index))
    })
    .bind((address, port))
    .map_err(|source| WebError::Bind {
        addr: format!("{}:{}", address, port),
        source,
    })?
    .run()
    .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test;

    #[actix_web::test]
    async fn index_serves_the_generator_page() {
        let app =
            test::init_service(App::new().route("/", web::get().to(index))).await;

        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let content_type = resp
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        assert!(content_type.starts_with("text/html"));

        let body = test::read_body(resp).await;
        let body = std::str::from_utf8(&body).unwrap();
        assert!(body.contains("Password Generator"));
        assert!(body.contains("id=\"generate\""));
    }
}
