#![allow(dead_code)]

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread;

use actix_web::http::StatusCode;
use actix_web::rt::System;
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use tera::Tera;

/// `(path, query_string)` of every request the stub upstream received.
pub type RequestLog = Arc<Mutex<Vec<(String, String)>>>;

/// Starts a stub lookup backend on a random local port answering every
/// request with `status` and `body`, and returns its base URL plus the
/// request log. The server lives on its own thread for the rest of the
/// test process.
pub fn spawn_upstream(status: u16, body: &str) -> (String, RequestLog) {
    let log: RequestLog = Arc::new(Mutex::new(Vec::new()));
    let state = (status, body.to_string(), Arc::clone(&log));
    let (port_tx, port_rx) = mpsc::channel();

    thread::spawn(move || {
        System::new().block_on(async move {
            let server = HttpServer::new(move || {
                let (status, body, log) = state.clone();
                App::new().default_service(web::to(move |req: HttpRequest| {
                    let (status, body, log) = (status, body.clone(), Arc::clone(&log));
                    async move {
                        log.lock()
                            .unwrap()
                            .push((req.path().to_string(), req.query_string().to_string()));
                        HttpResponse::build(
                            StatusCode::from_u16(status).expect("invalid stub status code"),
                        )
                        .content_type("application/json; charset=utf-8")
                        .body(body)
                    }
                }))
            })
            .workers(1)
            .bind(("127.0.0.1", 0))
            .expect("failed to bind stub upstream");

            let port = server.addrs()[0].port();
            port_tx.send(port).expect("test dropped the stub upstream");

            server.run().await.expect("stub upstream crashed");
        });
    });

    let port = port_rx.recv().expect("stub upstream failed to start");
    (format!("http://127.0.0.1:{port}"), log)
}

/// Template set as loaded by the real server.
pub fn test_tera() -> Tera {
    Tera::new("templates/**/*.html").expect("failed to load templates")
}
