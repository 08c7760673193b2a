//! HTTP server for interactive analysis mode
//!
//! `synthscan serve` → starts server, opens browser, shows the three
//! detector panes (image / text / video).
//!
//! The API mirrors the caller contract of the engine: text arrives as a
//! body parameter, image and video arrive as artifact *metadata* only
//! (name, size, MIME type). The simulated engine never reads file content,
//! so there is nothing to upload - the browser describes the file and the
//! server answers with a verdict.

use crate::artifact::{FileArtifact, MediaKind, MIN_TEXT_CHARS};
use crate::engine::Engine;
use crate::report::VerdictReport;
use serde::{Deserialize, Serialize};
use std::io;
use std::io::Read as _;
use tiny_http::{Header, Method, Request, Response, Server};

// Embed the UI directly in the binary
const UI_HTML: &str = include_str!("ui.html");

#[derive(Serialize)]
struct ApiResponse<T> {
    ok: bool,
    data: Option<T>,
    error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    fn success(data: T) -> Self {
        Self { ok: true, data: Some(data), error: None }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self { ok: false, data: None, error: Some(message.into()) }
    }
}

#[derive(Deserialize, Debug)]
struct TextParams {
    text: String,
}

/// Start server, open browser, serve UI
pub fn start(port: u16, engine: Engine) -> io::Result<()> {
    let addr = format!("127.0.0.1:{}", port);
    let server = Server::http(&addr)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;

    // tiny_http is synchronous; the async engine runs on a local runtime,
    // one request at a time, exactly like a single browser user.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;

    let url = format!("http://localhost:{}", port);
    eprintln!("\n\x1b[1;35m◈ synthscan\x1b[0m");
    eprintln!("   {}\n", url);

    // Open browser
    let _ = open::that(&url);

    for request in server.incoming_requests() {
        if let Err(e) = handle_request(request, &engine, &runtime) {
            eprintln!("Error: {}", e);
        }
    }

    Ok(())
}

fn handle_request(
    mut request: Request,
    engine: &Engine,
    runtime: &tokio::runtime::Runtime,
) -> io::Result<()> {
    let url = request.url().to_string();
    let path = url.split('?').next().unwrap_or("/");
    let method = request.method().clone();

    match (&method, path) {
        // Serve embedded UI
        (&Method::Get, "/") => {
            let response = Response::from_string(UI_HTML)
                .with_header(Header::from_bytes(&b"Content-Type"[..], &b"text/html"[..]).unwrap());
            request.respond(response)
        }

        // API: analyze a text body
        (&Method::Post, "/api/text") => {
            let body = read_body(&mut request)?;
            match parse_text_params(&body) {
                Some(params) if params.text.trim().chars().count() >= MIN_TEXT_CHARS => {
                    eprintln!("→ text ({} chars)", params.text.len());
                    match runtime.block_on(engine.analyze_text(&params.text)) {
                        Ok(verdict) => {
                            json_response(request, &ApiResponse::success(VerdictReport::Text(verdict)))
                        }
                        Err(e) => json_response(request, &ApiResponse::<()>::failure(e.to_string())),
                    }
                }
                Some(_) => json_response(
                    request,
                    &ApiResponse::<()>::failure(format!(
                        "Text too short. Please enter at least {} characters for accurate analysis.",
                        MIN_TEXT_CHARS
                    )),
                ),
                None => json_response(request, &ApiResponse::<()>::failure("missing text parameter")),
            }
        }

        // API: analyze an image or video artifact (metadata only)
        (&Method::Post, "/api/image") => {
            analyze_artifact(request, engine, runtime, MediaKind::Image)
        }
        (&Method::Post, "/api/video") => {
            analyze_artifact(request, engine, runtime, MediaKind::Video)
        }

        // 404
        _ => {
            let response = Response::from_string("Not found").with_status_code(404);
            request.respond(response)
        }
    }
}

fn analyze_artifact(
    mut request: Request,
    engine: &Engine,
    runtime: &tokio::runtime::Runtime,
    expected: MediaKind,
) -> io::Result<()> {
    let body = read_body(&mut request)?;

    let artifact: FileArtifact = match serde_json::from_str(&body) {
        Ok(artifact) => artifact,
        Err(_) => {
            return json_response(
                request,
                &ApiResponse::<()>::failure("missing or malformed artifact metadata"),
            )
        }
    };

    if let Err(message) = check_category(&artifact, expected) {
        return json_response(request, &ApiResponse::<()>::failure(message));
    }

    eprintln!("→ {} {} ({} bytes)", expected, artifact.name, artifact.size_bytes);

    let outcome = match expected {
        MediaKind::Image => runtime
            .block_on(engine.analyze_image(&artifact))
            .map(VerdictReport::Image),
        MediaKind::Video => runtime
            .block_on(engine.analyze_video(&artifact))
            .map(VerdictReport::Video),
    };

    match outcome {
        Ok(verdict) => json_response(request, &ApiResponse::success(verdict)),
        Err(e) => json_response(request, &ApiResponse::<()>::failure(e.to_string())),
    }
}

/// The caller-side category gate, with the messages the UI shows as toasts.
fn check_category(artifact: &FileArtifact, expected: MediaKind) -> Result<(), String> {
    match artifact.media_kind() {
        Some(kind) if kind == expected => Ok(()),
        _ => Err(format!(
            "Invalid file type. Please upload {} file.",
            match expected {
                MediaKind::Image => "an image",
                MediaKind::Video => "a video",
            }
        )),
    }
}

fn read_body(request: &mut Request) -> io::Result<String> {
    let mut body = String::new();
    request.as_reader().read_to_string(&mut body)?;
    Ok(body)
}

/// Accept either a urlencoded form post or a JSON body, whichever the
/// client sends.
fn parse_text_params(body: &str) -> Option<TextParams> {
    if let Ok(params) = serde_urlencoded::from_str::<TextParams>(body) {
        return Some(params);
    }
    serde_json::from_str::<TextParams>(body).ok()
}

fn json_response<T: Serialize>(request: Request, payload: &ApiResponse<T>) -> io::Result<()> {
    let json = serde_json::to_string(payload)?;
    let response = Response::from_string(json)
        .with_header(Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..]).unwrap());
    request.respond(response)
}
