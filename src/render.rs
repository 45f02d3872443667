//! Rendering of the search page. Everything here is a pure function of the
//! view; nothing reads the network or mutates state.

use std::fmt::Write;

use crate::data_models::BookResult;
use crate::view::SearchView;

const GRID_CLASS: &str = "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6";

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

pub fn render_card(book: &BookResult) -> String {
    let title = escape_html(&book.title);
    let mut card = String::new();
    let _ = write!(card, r#"<div class="card" data-key="{}">"#, book.id);
    let _ = write!(
        card,
        r#"<div class="card-header"><h3 class="card-title">{}</h3><p class="card-description">{}</p></div>"#,
        title,
        escape_html(book.display_authors())
    );
    card.push_str(r#"<div class="card-content">"#);
    if let Some(url) = book.thumbnail_url() {
        let _ = write!(card, r#"<img src="{}" alt="{}">"#, escape_html(url), title);
    }
    let _ = write!(card, "<p>{}</p></div>", escape_html(&book.description));
    let _ = write!(
        card,
        r#"<div class="card-footer"><p class="text-sm text-muted-foreground">{}</p></div>"#,
        escape_html(&book.footer_line())
    );
    card.push_str("</div>");
    card
}

pub fn render_page(view: &SearchView) -> String {
    let mut page = String::from(
        "<!DOCTYPE html>\n<html><head><meta charset=\"utf-8\"><title>Book Search</title></head><body>\n",
    );
    page.push_str(r#"<main class="p-8">"#);
    let _ = write!(
        page,
        concat!(
            r#"<div class="mb-8"><form action="/search" method="get">"#,
            r#"<input type="text" name="query" placeholder="Search" value="{}">"#,
            r#"<button type="submit">Search</button>"#,
            r#"<button type="submit" formaction="/output" formmethod="post">Get Output</button>"#,
            "</form></div>"
        ),
        escape_html(view.query())
    );
    if let Some(output) = view.output() {
        let _ = write!(page, r#"<div class="output">{}</div>"#, escape_html(output));
    }
    let _ = write!(page, r#"<div class="{GRID_CLASS}">"#);
    for book in view.results() {
        page.push_str(&render_card(book));
    }
    page.push_str("</div></main>\n</body></html>\n");
    page
}

/// Plain-text rendition of a card for the terminal.
pub fn render_card_text(book: &BookResult) -> String {
    let mut lines = vec![book.title.clone()];
    if !book.display_authors().is_empty() {
        lines.push(book.display_authors().to_string());
    }
    if let Some(url) = book.thumbnail_url() {
        lines.push(format!("[image: {url}]"));
    }
    lines.push(book.description.clone());
    lines.push(book.footer_line());
    lines.join("\n")
}
