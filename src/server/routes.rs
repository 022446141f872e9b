//! Two-route HTTP front end: a landing page and a story download.
//!
//! Requests are served one at a time on the calling thread; each `/generate` runs the full
//! render pipeline before the response is written.
use std::io::Cursor;
use std::net::SocketAddr;

use anyhow::Context;

use crate::foundation::error::StoryResult;
use crate::render::pipeline::{RenderedStory, StoryRenderer};

const INDEX_HTML: &str = include_str!("../../static/index.html");

/// Resolved request target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Index,
    Generate,
    NotFound,
    MethodNotAllowed,
}

/// Map a method and raw URL (query string allowed) to a [`Route`].
pub fn route(method: &tiny_http::Method, url: &str) -> Route {
    let path = url.split(['?', '#']).next().unwrap_or_default();
    let known = matches!(path, "/" | "/generate");
    match (method, path) {
        (tiny_http::Method::Get, "/") => Route::Index,
        (tiny_http::Method::Get, "/generate") => Route::Generate,
        _ if known => Route::MethodNotAllowed,
        _ => Route::NotFound,
    }
}

pub struct StoryServer {
    http: tiny_http::Server,
    renderer: StoryRenderer,
}

impl StoryServer {
    pub fn bind(addr: &str, renderer: StoryRenderer) -> StoryResult<Self> {
        let http = tiny_http::Server::http(addr)
            .map_err(|e| anyhow::anyhow!("bind http server on {addr}: {e}"))?;
        Ok(Self { http, renderer })
    }

    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.http.server_addr().to_ip()
    }

    /// Accept and answer requests until the listener fails.
    pub fn serve(mut self) -> StoryResult<()> {
        if let Some(addr) = self.local_addr() {
            tracing::info!(%addr, "serving");
        }
        loop {
            let request = self.http.recv().context("accept http request")?;
            self.handle(request);
        }
    }

    fn handle(&mut self, request: tiny_http::Request) {
        let method = request.method().clone();
        let url = request.url().to_string();
        let route = route(&method, &url);
        tracing::debug!(%method, %url, ?route, "request");

        let result = match route {
            Route::Index => request.respond(html_response(200, INDEX_HTML)),
            Route::Generate => match self.renderer.render_next(chrono::Local::now().naive_local())
            {
                Ok(story) => match story_response(&story) {
                    Ok(resp) => request.respond(resp),
                    Err(e) => {
                        tracing::error!(error = %e, "open rendered story");
                        request.respond(text_response(500, "internal server error"))
                    }
                },
                Err(e) => {
                    tracing::error!(error = %e, "render failed");
                    request.respond(text_response(500, "internal server error"))
                }
            },
            Route::NotFound => request.respond(text_response(404, "not found")),
            Route::MethodNotAllowed => request.respond(text_response(405, "method not allowed")),
        };
        if let Err(e) = result {
            tracing::warn!(error = %e, %url, "failed to write response");
        }
    }
}

fn header(name: &str, value: &str) -> Option<tiny_http::Header> {
    tiny_http::Header::from_bytes(name.as_bytes(), value.as_bytes()).ok()
}

fn with_header<R: std::io::Read>(
    resp: tiny_http::Response<R>,
    name: &str,
    value: &str,
) -> tiny_http::Response<R> {
    match header(name, value) {
        Some(h) => resp.with_header(h),
        None => resp,
    }
}

fn html_response(status: u16, body: &str) -> tiny_http::Response<Cursor<Vec<u8>>> {
    with_header(
        tiny_http::Response::from_data(body.as_bytes().to_vec()).with_status_code(status),
        "Content-Type",
        "text/html; charset=utf-8",
    )
}

fn text_response(status: u16, body: &str) -> tiny_http::Response<Cursor<Vec<u8>>> {
    with_header(
        tiny_http::Response::from_data(body.as_bytes().to_vec()).with_status_code(status),
        "Content-Type",
        "text/plain; charset=utf-8",
    )
}

fn story_response(story: &RenderedStory) -> StoryResult<tiny_http::Response<std::fs::File>> {
    let file = std::fs::File::open(&story.path)
        .with_context(|| format!("open story '{}'", story.path.display()))?;
    let name = story.file_name().unwrap_or("story.jpg");
    let resp = with_header(
        tiny_http::Response::from_file(file),
        "Content-Type",
        "image/jpeg",
    );
    Ok(with_header(
        resp,
        "Content-Disposition",
        &format!("attachment; filename=\"{name}\""),
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/server/routes.rs"]
mod tests;
