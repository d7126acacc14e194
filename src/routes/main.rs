use actix_web::{Responder, get, web};
use serde::Deserialize;
use tera::{Context, Tera};

use crate::controller::{SearchController, page_href};
use crate::repository::HttpOuiClient;
use crate::routes::{redirect, render_template};
use crate::services::search::load_results_page;

#[derive(Deserialize)]
struct SearchFormParams {
    q: Option<String>,
}

#[derive(Deserialize)]
struct ResultsQueryParams {
    page: Option<usize>,
}

#[get("/")]
pub async fn show_index(tera: web::Data<Tera>) -> impl Responder {
    let mut context = Context::new();
    context.insert("current_page", "index");

    render_template(&tera, "main/index.html", &context)
}

/// Turns a search-box submission into the canonical results URL.
#[get("/search")]
pub async fn search_redirect(params: web::Query<SearchFormParams>) -> impl Responder {
    let query = params.q.as_deref().unwrap_or("").trim();
    if query.is_empty() {
        return redirect("/");
    }

    redirect(&page_href(query, 1))
}

#[get("/{query}")]
pub async fn show_results(
    path: web::Path<String>,
    params: web::Query<ResultsQueryParams>,
    controller: web::Data<SearchController<HttpOuiClient>>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let query = path.into_inner();
    let page = params.page.unwrap_or(1);

    let data = load_results_page(&controller, &query, page).await;

    let mut context = Context::new();
    context.insert("current_page", "results");
    context.insert("query", &query);
    context.insert("query_encoded", &urlencoding::encode(&query).into_owned());
    context.insert("data", &data);

    render_template(&tera, "search/results.html", &context)
}
