//! Gallery server: browse the catalog, tweak options and preview layouts in a
//! browser.
//!
//! A single-threaded `tiny_http` loop. Requests are handled one at a time by
//! [`route`], a pure function from method + URL to a [`Reply`], so the
//! routing table is testable without opening a socket.

use tiny_http::{Header, Response, Server};

use crate::catalog::{self, TemplateDescriptor};
use crate::error::CatalogError;
use crate::generate;
use crate::options::{LayoutOptions, OptionValue};
use crate::preview;

mod css;
mod page;

/// A fully rendered HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub content_type: &'static str,
    pub body: String,
}

impl Reply {
    fn html(status: u16, body: String) -> Self {
        Self {
            status,
            content_type: "text/html; charset=utf-8",
            body,
        }
    }

    fn json(body: String) -> Self {
        Self {
            status: 200,
            content_type: "application/json",
            body,
        }
    }

    fn not_found(what: &str) -> Self {
        Self::html(404, page::build_error_page(404, &format!("Not found: {what}")))
    }

    fn bad_request(err: &CatalogError) -> Self {
        Self::html(400, page::build_error_page(400, &err.to_string()))
    }
}

/// Start the gallery server and block forever.
pub fn run_server(host: &str, port: u16) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let addr = format!("{host}:{port}");
    let server = Server::http(&addr)?;

    eprintln!("layout gallery");
    eprintln!("  gallery:   http://{addr}/");
    eprintln!("  templates: http://{addr}/api/templates");
    eprintln!("  {} templates loaded", catalog::all().len());

    for request in server.incoming_requests() {
        let method = request.method().to_string();
        let url = request.url().to_string();
        let reply = route(&method, &url);
        tracing::debug!(%method, %url, status = reply.status, "request");

        let mut response = Response::from_string(reply.body).with_status_code(reply.status);
        if let Ok(header) = Header::from_bytes(&b"Content-Type"[..], reply.content_type.as_bytes()) {
            response = response.with_header(header);
        }
        if let Err(e) = request.respond(response) {
            tracing::warn!(%url, "failed to send response: {e}");
        }
    }

    Ok(())
}

/// Resolve a request to its reply.
pub fn route(method: &str, url: &str) -> Reply {
    if method != "GET" {
        return Reply::html(405, page::build_error_page(405, "Method not allowed"));
    }

    let (path, query) = url.split_once('?').unwrap_or((url, ""));
    let segments: Vec<&str> = path.trim_matches('/').split('/').collect();

    match segments.as_slice() {
        [""] => Reply::html(200, page::build_gallery_page()),
        ["api", "templates"] => match serde_json::to_string(catalog::all()) {
            Ok(body) => Reply::json(body),
            Err(e) => Reply::html(500, page::build_error_page(500, &e.to_string())),
        },
        ["template", id] => with_template(id, query, |template, options| {
            let layout = generate::generate(template, &options);
            Reply::html(200, page::build_template_page(template, &options, &layout))
        }),
        ["preview", id] => with_template(id, query, |template, options| {
            let layout = generate::generate(template, &options);
            Reply::html(200, preview::preview_for(&layout))
        }),
        ["api", "layout", id] => with_template(id, query, |template, options| {
            let layout = generate::generate(template, &options);
            match serde_json::to_string(&layout) {
                Ok(body) => Reply::json(body),
                Err(e) => Reply::html(500, page::build_error_page(500, &e.to_string())),
            }
        }),
        _ => Reply::not_found(path),
    }
}

fn with_template(
    id: &str,
    query: &str,
    render: impl FnOnce(&'static TemplateDescriptor, LayoutOptions) -> Reply,
) -> Reply {
    // `+` is literal in a path segment.
    let id = urlencoding::decode(id).map_or_else(|_| id.to_string(), |d| d.into_owned());
    let Some(template) = catalog::find(&id) else {
        tracing::warn!(template = %id, "unknown template requested");
        return Reply::not_found(&id);
    };
    match parse_query(query) {
        Ok(options) => render(template, options),
        Err(e) => Reply::bad_request(&e),
    }
}

/// Turn `gap=2rem&wrap=true` into an option record.
pub fn parse_query(query: &str) -> Result<LayoutOptions, CatalogError> {
    let mut options = LayoutOptions::new();
    for pair in query.split('&').filter(|p| !p.is_empty()) {
        let (key, value) = pair
            .split_once('=')
            .ok_or_else(|| CatalogError::invalid_option(pair))?;
        let (Some(key), Some(value)) = (form_decode(key), form_decode(value)) else {
            return Err(CatalogError::invalid_option(pair));
        };
        if key.is_empty() {
            return Err(CatalogError::invalid_option(pair));
        }
        options.set(&key, OptionValue::parse(&value));
    }
    Ok(options)
}

/// Decode one `application/x-www-form-urlencoded` component: `+` is a
/// space, then `%XX` escapes. Escapes that decode to invalid UTF-8 are
/// rejected; malformed escapes are kept literally.
fn form_decode(s: &str) -> Option<String> {
    urlencoding::decode(&s.replace('+', " "))
        .ok()
        .map(|decoded| decoded.into_owned())
}
