use axum::{
    Form,
    extract::{Query, State},
    response::Html,
};

use crate::client::SearchBackend;
use crate::controller::SearchController;
use crate::render::render_page;

use super::models::QueryForm;

pub async fn index_handler<B: SearchBackend>(
    State(controller): State<SearchController<B>>,
) -> Html<String> {
    Html(render_page(&controller.snapshot().await))
}

pub async fn search_handler<B: SearchBackend>(
    State(controller): State<SearchController<B>>,
    Query(form): Query<QueryForm>,
) -> Html<String> {
    controller.set_query(form.query).await;
    let outcome = controller.search().await;
    log::debug!("search finished: {:?}", outcome);
    Html(render_page(&controller.snapshot().await))
}

pub async fn output_handler<B: SearchBackend>(
    State(controller): State<SearchController<B>>,
    Form(form): Form<QueryForm>,
) -> Html<String> {
    controller.set_query(form.query.clone()).await;
    controller.post_request(&form.query).await;
    Html(render_page(&controller.snapshot().await))
}
