use resfinder_restaurant_service::models::Restaurant;
use url::Url;

use crate::portal::{self, BookingPortal};
use crate::view::{SearchView, ViewState};

const STYLES: &str = r#"
body { margin: 0; min-height: 100vh; background: #f9fafb; font-family: system-ui, sans-serif; color: #111827; }
.container { max-width: 56rem; margin: 0 auto; padding: 4rem 1rem; }
header { text-align: center; margin-bottom: 3rem; }
header h1 { font-size: 3rem; margin: 0 0 1rem; }
header p { font-size: 1.25rem; color: #4b5563; margin: 0; }
form { position: relative; max-width: 42rem; margin: 0 auto 3rem; }
form input { box-sizing: border-box; width: 100%; padding: 1rem 8rem 1rem 1.5rem; font-size: 1.125rem; border: 1px solid #d1d5db; border-radius: 9999px; }
form button { position: absolute; right: .5rem; top: .5rem; padding: .5rem 1.5rem; border: 0; border-radius: 9999px; background: #2563eb; color: #fff; font-size: 1rem; cursor: pointer; }
form button:hover { background: #1d4ed8; }
form button:disabled { background: #9ca3af; }
.status { text-align: center; padding: 2rem 0; color: #4b5563; }
.status .hint { color: #6b7280; margin-top: .5rem; }
.spinner { width: 3rem; height: 3rem; margin: 0 auto; border-radius: 50%; border-bottom: 2px solid #2563eb; animation: spin 1s linear infinite; }
@keyframes spin { to { transform: rotate(360deg); } }
.card { display: flex; justify-content: space-between; align-items: flex-start; background: #fff; border-radius: .5rem; box-shadow: 0 4px 6px rgba(0,0,0,.1); padding: 1.5rem; margin-bottom: 1rem; }
.card h3 { margin: 0 0 .5rem; font-size: 1.25rem; }
.card p { margin: 0; color: #4b5563; }
.book { color: #fff; text-decoration: none; padding: .5rem 1rem; border-radius: .5rem; font-weight: 500; }
"#;

// Swaps in the busy indicator while the browser waits for the next page.
const SCRIPT: &str = r#"
document.getElementById("search-form").addEventListener("submit", function (e) {
  var input = this.querySelector("input");
  var button = this.querySelector("button");
  if (!input.value.trim() || button.disabled) { e.preventDefault(); return; }
  button.disabled = true;
  button.textContent = "Searching...";
  document.getElementById("results").innerHTML = document.getElementById("loading").innerHTML;
});
"#;

pub fn page(view: &SearchView) -> String {
    let mut html = String::with_capacity(8 * 1024);
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str("<title>ResFinder</title>\n<style>");
    html.push_str(STYLES);
    html.push_str(&portal_styles());
    html.push_str("</style>\n</head>\n<body>\n<div class=\"container\">\n");

    html.push_str(
        "<header>\n<h1>ResFinder</h1>\n\
         <p>Find a direct link to a restaurant's reservation page</p>\n</header>\n",
    );

    let button = if view.is_loading { "Searching..." } else { "Search" };
    html.push_str(&format!(
        "<form id=\"search-form\" method=\"get\" action=\"/\">\n\
         <input type=\"text\" name=\"q\" value=\"{}\" placeholder=\"Search by name\" autofocus>\n\
         <button type=\"submit\"{}>{}</button>\n</form>\n",
        escape(&view.search_query),
        if view.is_loading { " disabled" } else { "" },
        button,
    ));

    html.push_str("<main id=\"results\">\n");
    html.push_str(&results(view));
    html.push_str("</main>\n");

    html.push_str(&format!(
        "<template id=\"loading\">{}</template>\n",
        loading_indicator()
    ));
    html.push_str("</div>\n<script>");
    html.push_str(SCRIPT);
    html.push_str("</script>\n</body>\n</html>\n");
    html
}

/// The result area. Empty until the first search.
pub fn results(view: &SearchView) -> String {
    match view.state() {
        ViewState::Idle => String::new(),
        ViewState::Loading => loading_indicator(),
        ViewState::Empty => concat!(
            "<div class=\"status\">\n",
            "<p>No restaurants found matching your search.</p>\n",
            "<p class=\"hint\">Try searching for a different restaurant, location, or cuisine.</p>\n",
            "</div>\n"
        )
        .to_string(),
        ViewState::Results => {
            let count = view.results.len();
            let mut html = format!(
                "<h2>Found {} restaurant{}</h2>\n",
                count,
                if count == 1 { "" } else { "s" }
            );
            for restaurant in &view.results {
                html.push_str(&card(restaurant));
            }
            html
        }
    }
}

fn loading_indicator() -> String {
    concat!(
        "<div class=\"status\">\n",
        "<div class=\"spinner\"></div>\n",
        "<p>Searching restaurants...</p>\n",
        "</div>\n"
    )
    .to_string()
}

fn card(restaurant: &Restaurant) -> String {
    let style = portal::style(&restaurant.booking_portal);
    format!(
        "<div class=\"card\">\n\
         <div>\n<h3>{name}</h3>\n<p>{location}</p>\n</div>\n\
         <a class=\"book {class}\"{href} target=\"_blank\" rel=\"noopener noreferrer\">{portal}</a>\n\
         </div>\n",
        name = escape(&restaurant.name),
        location = escape(&restaurant.location),
        class = style.class,
        href = match booking_href(&restaurant.booking_url) {
            Some(url) => format!(" href=\"{}\"", escape(url.as_str())),
            None => String::new(),
        },
        portal = escape(&restaurant.booking_portal),
    )
}

/// Only web links are rendered as clickable; anything else (`javascript:`,
/// `data:`, unparseable text) gets no `href`.
fn booking_href(raw: &str) -> Option<Url> {
    let url = Url::parse(raw.trim()).ok()?;
    matches!(url.scheme(), "http" | "https").then_some(url)
}

fn portal_styles() -> String {
    BookingPortal::ALL
        .iter()
        .map(|p| {
            let s = p.style();
            format!(
                ".{0} {{ background: {1}; }}\n.{0}:hover {{ background: {2}; }}\n",
                s.class, s.background, s.hover
            )
        })
        .collect()
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            c => out.push(c),
        }
    }
    out
}
