use std::time::Duration;

use actix_cors::Cors;
use actix_files::Files;
use actix_web::{App, HttpServer, middleware, web};
use tera::Tera;

use crate::controller::SearchController;
use crate::gateway::ContentNegotiation;
use crate::models::config::ServerConfig;
use crate::repository::HttpOuiClient;
use crate::routes::main::{search_redirect, show_index, show_results};

pub mod controller;
pub mod domain;
pub mod dto;
pub mod gateway;
pub mod models;
pub mod pagination;
pub mod repository;
pub mod routes;
pub mod services;

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    let tera = Tera::new(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    // One pooled client serves both the gateway proxy and the controller.
    let lookup_client = HttpOuiClient::new(
        &server_config.backend_url,
        Duration::from_secs(server_config.request_timeout_secs),
    )
    .map_err(|e| std::io::Error::other(format!("Failed to build lookup client: {e}")))?;

    let controller = SearchController::new(lookup_client.clone());

    let bind_address = (server_config.address.clone(), server_config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(Files::new("/assets", "./assets"))
            .service(
                web::scope("")
                    .wrap(ContentNegotiation::new(lookup_client.clone()))
                    .service(show_index)
                    .service(search_redirect)
                    .service(show_results),
            )
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(controller.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
