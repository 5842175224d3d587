/// Landing page route
use axum::response::Html;
use twoflac_web::{render, Delays, Page};

/// GET / - landing page with trending and the initial search already loaded
pub async fn index() -> Html<String> {
    let mut page = Page::new(Delays::none());
    page.initialize().await;
    Html(render::document(&page))
}
