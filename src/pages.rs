use actix_web::http::header::ContentType;
use actix_web::HttpResponse;

use crate::entry::{day_tag, DayEntry};

pub fn item_response(entry: &DayEntry) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(render_item(entry))
}

/// The item page: type label, zero-padded day, quote, image. Quotes are
/// authored as plain text, so everything user-visible is escaped.
pub fn render_item(entry: &DayEntry) -> String {
    let label = escape(&entry.type_label);
    let quote = escape(&entry.quote);
    let image_url = escape(&entry.image_url);
    let day = day_tag(entry.day);

    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{label} - December {day}</title>\n\
         <link rel=\"stylesheet\" href=\"/static/style.css\">\n\
         </head>\n\
         <body>\n\
         <main class=\"entry\">\n\
         <h1>{label}</h1>\n\
         <p class=\"day\">December {day}</p>\n\
         <figure>\n\
         <img src=\"{image_url}\" alt=\"{label}, December {day}\">\n\
         <figcaption>{quote}</figcaption>\n\
         </figure>\n\
         </main>\n\
         </body>\n\
         </html>\n"
    )
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
