//! Content negotiation ahead of UI rendering.
//!
//! Every inbound request is classified from its headers: data clients get
//! the backend's JSON for `/{query}` directly, UI clients fall through to
//! the rendered pages. The resource model is strictly one path segment.

use std::rc::Rc;

use actix_web::body::{EitherBody, MessageBody};
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use actix_web::http::StatusCode;
use actix_web::http::header;
use actix_web::Error;
use futures_util::future::{LocalBoxFuture, Ready, ready};

pub mod classifier;
pub mod proxy;

pub use classifier::{ClientKind, classify};

use crate::repository::HttpOuiClient;

/// Static-asset paths are served as-is, never negotiated.
fn is_exempt(path: &str) -> bool {
    path.starts_with("/assets/") || path == "/favicon.ico"
}

/// Middleware factory forwarding data clients to the lookup backend.
pub struct ContentNegotiation {
    client: HttpOuiClient,
}

impl ContentNegotiation {
    pub fn new(client: HttpOuiClient) -> Self {
        Self { client }
    }
}

impl<S, B> Transform<S, ServiceRequest> for ContentNegotiation
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = ContentNegotiationMiddleware<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(ContentNegotiationMiddleware {
            service: Rc::new(service),
            client: self.client.clone(),
        }))
    }
}

pub struct ContentNegotiationMiddleware<S> {
    service: Rc<S>,
    client: HttpOuiClient,
}

impl<S, B> Service<ServiceRequest> for ContentNegotiationMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let path = req.path().to_owned();

        if is_exempt(&path) {
            return pass_through(Rc::clone(&self.service), req);
        }

        let segments = path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(str::to_owned)
            .collect::<Vec<_>>();

        if segments.len() > 1 {
            return Box::pin(async move {
                let response =
                    proxy::error_body(StatusCode::BAD_REQUEST, "resource paths have one segment");
                Ok(req.into_response(response).map_into_right_body())
            });
        }

        let accept = header_str(&req, header::ACCEPT);
        let user_agent = header_str(&req, header::USER_AGENT);
        if classify(accept.as_deref(), user_agent.as_deref()) == ClientKind::Ui {
            return pass_through(Rc::clone(&self.service), req);
        }

        let client = self.client.clone();
        Box::pin(async move {
            let response = match segments.first() {
                Some(term) => proxy::proxy_search(&client, term, req.query_string()).await,
                None => proxy::error_body(StatusCode::BAD_REQUEST, "missing query"),
            };
            Ok(req.into_response(response).map_into_right_body())
        })
    }
}

fn pass_through<S, B>(
    service: Rc<S>,
    req: ServiceRequest,
) -> LocalBoxFuture<'static, Result<ServiceResponse<EitherBody<B>>, Error>>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: MessageBody + 'static,
{
    Box::pin(async move {
        service
            .call(req)
            .await
            .map(|response| response.map_into_left_body())
    })
}

fn header_str(req: &ServiceRequest, name: header::HeaderName) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
}
