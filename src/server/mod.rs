use std::net::SocketAddr;
use std::time::Instant;

use serde::Serialize;
use tiny_http::{Header, Method, Request, Response, Server};

use crate::codegen::RenderOutput;
use crate::error::{BubbleError, Result};
use crate::params::{Kind, StyleParameters};
use crate::session::{CopyTarget, EditSession, FieldEdit, COPY_RESET};

mod css;
mod inline_js;
mod page;
mod panels;
mod util;

/// Start the configurator on `127.0.0.1:{port}` and serve until the process
/// is stopped. Requests are handled one at a time on this thread, so the
/// session needs no locking.
pub fn run_configurator(session: EditSession, port: u16) -> Result<()> {
    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let server = Server::http(addr).map_err(BubbleError::server)?;

    log::info!("{} configurator", session.kind().label());
    log::info!("  page:   http://localhost:{port}/");
    log::info!("  state:  http://localhost:{port}/state");
    log::info!("  export: http://localhost:{port}/export/html, /export/css");

    let mut session = session;
    for request in server.incoming_requests() {
        if let Err(e) = handle(&mut session, request) {
            log::warn!("request failed: {e}");
        }
    }
    Ok(())
}

fn handle(session: &mut EditSession, mut request: Request) -> Result<()> {
    let mut body = String::new();
    if *request.method() == Method::Post {
        request.as_reader().read_to_string(&mut body)?;
    }
    let reply = route(session, request.method(), request.url(), &body, Instant::now());
    log::debug!("{} {} -> {}", request.method(), request.url(), reply.status);

    let mut response = Response::from_string(reply.body)
        .with_status_code(reply.status)
        .with_header(header("Content-Type", reply.content_type)?);
    if let Some(filename) = reply.attachment {
        let disposition = format!("attachment; filename=\"{filename}\"");
        response = response.with_header(header("Content-Disposition", &disposition)?);
    }
    request.respond(response)?;
    Ok(())
}

fn header(name: &str, value: &str) -> Result<Header> {
    Header::from_bytes(name.as_bytes(), value.as_bytes())
        .map_err(|()| BubbleError::server(format!("invalid header {name}: {value}")))
}

// ── Routing ───────────────────────────────────────────────────────────

/// A transport-independent response.
#[derive(Debug)]
struct Reply {
    status: u16,
    content_type: &'static str,
    attachment: Option<String>,
    body: String,
}

impl Reply {
    fn html(body: String) -> Self {
        Self {
            status: 200,
            content_type: "text/html; charset=utf-8",
            attachment: None,
            body,
        }
    }

    fn json<T: Serialize>(status: u16, value: &T) -> Self {
        let body = serde_json::to_string(value)
            .unwrap_or_else(|e| format!(r#"{{"error":"serialize failed: {e}"}}"#));
        Self {
            status,
            content_type: "application/json",
            attachment: None,
            body,
        }
    }

    fn download(content_type: &'static str, filename: String, body: String) -> Self {
        Self {
            status: 200,
            content_type,
            attachment: Some(filename),
            body,
        }
    }

    fn not_found() -> Self {
        Self {
            status: 404,
            content_type: "text/plain; charset=utf-8",
            attachment: None,
            body: "not found".to_string(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EditResponse {
    output: RenderOutput,
    error: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CopyResponse {
    text: String,
    reset_after_ms: u64,
}

#[derive(Serialize)]
struct CopiedFlags {
    markup: bool,
    stylesheet: bool,
}

#[derive(Serialize)]
struct StateResponse<'a> {
    kind: Kind,
    params: &'a StyleParameters,
    output: RenderOutput,
    copied: CopiedFlags,
}

fn route(
    session: &mut EditSession,
    method: &Method,
    url: &str,
    body: &str,
    now: Instant,
) -> Reply {
    let path = url.split('?').next().unwrap_or(url);

    match (method, path) {
        (Method::Get, "/") => Reply::html(page::build_configurator_page(
            session.kind(),
            session.params(),
            &session.output(),
            COPY_RESET.as_millis() as u64,
        )),
        (Method::Get, "/state") => Reply::json(
            200,
            &StateResponse {
                kind: session.kind(),
                params: session.params(),
                output: session.output(),
                copied: CopiedFlags {
                    markup: session.copied.is_active(CopyTarget::Markup, now),
                    stylesheet: session.copied.is_active(CopyTarget::Stylesheet, now),
                },
            },
        ),
        (Method::Post, "/edit") => {
            let result = serde_json::from_str::<FieldEdit>(body)
                .map_err(BubbleError::from)
                .and_then(|edit| session.apply(edit));
            let (status, error) = match result {
                Ok(()) => (200, None),
                Err(e) => (400, Some(e.to_string())),
            };
            Reply::json(
                status,
                &EditResponse {
                    output: session.output(),
                    error,
                },
            )
        }
        (Method::Post, "/reset") => {
            session.reset();
            Reply::json(
                200,
                &EditResponse {
                    output: session.output(),
                    error: None,
                },
            )
        }
        (Method::Post, p) if p.starts_with("/copy/") => {
            match CopyTarget::from_path_segment(&p["/copy/".len()..]) {
                Some(target) => Reply::json(
                    200,
                    &CopyResponse {
                        text: session.copy(target, now),
                        reset_after_ms: COPY_RESET.as_millis() as u64,
                    },
                ),
                None => Reply::not_found(),
            }
        }
        (Method::Get, "/export/html") => Reply::download(
            "text/html; charset=utf-8",
            format!("{}.html", session.kind().class_name()),
            session.output().markup,
        ),
        (Method::Get, "/export/css") => Reply::download(
            "text/css; charset=utf-8",
            format!("{}.css", session.kind().class_name()),
            session.output().stylesheet,
        ),
        _ => Reply::not_found(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn json(reply: &Reply) -> serde_json::Value {
        serde_json::from_str(&reply.body).expect("reply should be JSON")
    }

    #[test]
    fn index_serves_page() {
        let mut session = EditSession::new(Kind::Bubble);
        let reply = route(&mut session, &Method::Get, "/", "", Instant::now());
        assert_eq!(reply.status, 200);
        assert!(reply.content_type.starts_with("text/html"));
        assert!(reply.body.contains("Bubble Generator"));
    }

    #[test]
    fn edit_updates_output() {
        let mut session = EditSession::new(Kind::Bubble);
        let reply = route(
            &mut session,
            &Method::Post,
            "/edit",
            r#"{"field":"borderRadius","value":12}"#,
            Instant::now(),
        );
        assert_eq!(reply.status, 200);
        let body = json(&reply);
        assert!(body["error"].is_null());
        assert!(body["output"]["stylesheet"]
            .as_str()
            .unwrap()
            .contains("  border-radius: 12px;\n"));
        assert_eq!(body["output"]["preview"]["container"]["borderRadius"], "12px");
    }

    #[test]
    fn invalid_edit_reports_error_and_keeps_state() {
        let mut session = EditSession::new(Kind::Bubble);
        let reply = route(
            &mut session,
            &Method::Post,
            "/edit",
            r#"{"field":"paddingY","value":99}"#,
            Instant::now(),
        );
        assert_eq!(reply.status, 400);
        let body = json(&reply);
        assert_eq!(body["error"], "paddingY must be between 4 and 40px, got 99");
        assert_eq!(session.params().padding_y, 8);

        let reply = route(&mut session, &Method::Post, "/edit", "not json", Instant::now());
        assert_eq!(reply.status, 400);
    }

    #[test]
    fn copy_then_state_reports_flag_until_reset() {
        let mut session = EditSession::new(Kind::Tooltip);
        let t0 = Instant::now();

        let reply = route(&mut session, &Method::Post, "/copy/markup", "", t0);
        let body = json(&reply);
        assert!(body["text"].as_str().unwrap().starts_with("<div class=\"tooltip\">"));
        assert_eq!(body["resetAfterMs"], 2000);

        let state = json(&route(&mut session, &Method::Get, "/state", "", t0 + Duration::from_millis(500)));
        assert_eq!(state["copied"]["markup"], true);
        assert_eq!(state["copied"]["stylesheet"], false);
        assert_eq!(state["kind"], "tooltip");

        let later = json(&route(&mut session, &Method::Get, "/state", "", t0 + Duration::from_secs(3)));
        assert_eq!(later["copied"]["markup"], false);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut session = EditSession::new(Kind::Bubble);
        route(&mut session, &Method::Post, "/edit", r#"{"field":"bodyText","value":"hey"}"#, Instant::now());
        route(&mut session, &Method::Post, "/reset", "", Instant::now());
        assert_eq!(session.params(), &Kind::Bubble.defaults());
    }

    #[test]
    fn exports_are_attachments() {
        let mut session = EditSession::new(Kind::Bubble);
        let reply = route(&mut session, &Method::Get, "/export/css", "", Instant::now());
        assert_eq!(reply.content_type, "text/css; charset=utf-8");
        assert_eq!(reply.attachment.as_deref(), Some("bubble.css"));
        assert!(reply.body.starts_with(".bubble {"));

        let reply = route(&mut session, &Method::Get, "/export/html?dl=1", "", Instant::now());
        assert_eq!(reply.attachment.as_deref(), Some("bubble.html"));
    }

    #[test]
    fn unknown_routes_are_404() {
        let mut session = EditSession::new(Kind::Bubble);
        assert_eq!(route(&mut session, &Method::Get, "/nope", "", Instant::now()).status, 404);
        assert_eq!(route(&mut session, &Method::Post, "/copy/js", "", Instant::now()).status, 404);
        assert_eq!(route(&mut session, &Method::Get, "/edit", "", Instant::now()).status, 404);
    }
}
