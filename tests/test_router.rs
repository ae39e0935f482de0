use std::path::PathBuf;

use tinyhttpd::http::request::{Method, RequestBuilder};
use tinyhttpd::http::response::{Response, StatusCode};
use tinyhttpd::routes::Router;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("tinyhttpd-router-{}-{}", name, std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[tokio::test]
async fn test_root_returns_bare_ok() {
    let router = Router::new(None);
    let resp = router.respond(b"GET / HTTP/1.1\r\nHost: localhost\r\n\r\n").await;

    assert_eq!(resp, Response::ok());
}

#[tokio::test]
async fn test_root_requires_get() {
    let router = Router::new(None);
    let resp = router.respond(b"POST / HTTP/1.1\r\n\r\n").await;

    assert_eq!(resp.status, StatusCode::NotFound);
}

#[tokio::test]
async fn test_echo_returns_rest_of_path() {
    let router = Router::new(None);
    let resp = router.respond(b"GET /echo/abc/def HTTP/1.1\r\n\r\n").await;

    assert_eq!(resp, Response::text("abc/def"));
}

#[tokio::test]
async fn test_echo_with_empty_text() {
    let router = Router::new(None);
    let resp = router.respond(b"GET /echo/ HTTP/1.1\r\n\r\n").await;

    assert_eq!(resp, Response::text(""));
}

#[tokio::test]
async fn test_echo_without_trailing_slash_is_not_found() {
    let router = Router::new(None);
    let resp = router.respond(b"GET /echo HTTP/1.1\r\n\r\n").await;

    assert_eq!(resp, Response::not_found());
}

#[tokio::test]
async fn test_echo_ignores_method() {
    let router = Router::new(None);
    let resp = router.respond(b"DELETE /echo/x HTTP/1.1\r\n\r\n").await;

    assert_eq!(resp, Response::text("x"));
}

#[tokio::test]
async fn test_user_agent_is_echoed() {
    let router = Router::new(None);
    let resp = router
        .respond(b"GET /user-agent HTTP/1.1\r\nHost: localhost\r\nUser-Agent: foobar/1.2.3\r\n\r\n")
        .await;

    assert_eq!(resp, Response::text("foobar/1.2.3"));
}

#[tokio::test]
async fn test_user_agent_missing_yields_none() {
    let router = Router::new(None);
    let resp = router.respond(b"GET /user-agent HTTP/1.1\r\nHost: localhost\r\n\r\n").await;

    assert_eq!(resp, Response::text("None"));
}

#[tokio::test]
async fn test_user_agent_prefix_match() {
    let router = Router::new(None);
    let req = RequestBuilder::new()
        .method(Method::GET)
        .path("/user-agents/extra")
        .header("User-Agent", "curl/8.0")
        .build()
        .unwrap();

    assert_eq!(router.route(&req).await, Response::text("curl/8.0"));
}

#[tokio::test]
async fn test_files_serves_content() {
    let dir = scratch_dir("serve");
    std::fs::write(dir.join("report.txt"), b"quarterly numbers").unwrap();

    let router = Router::new(Some(dir));
    let resp = router.respond(b"GET /files/report.txt HTTP/1.1\r\n\r\n").await;

    assert_eq!(resp, Response::octet_stream("quarterly numbers"));
}

#[tokio::test]
async fn test_files_missing_is_not_found() {
    let router = Router::new(Some(scratch_dir("missing")));
    let resp = router.respond(b"GET /files/nope.txt HTTP/1.1\r\n\r\n").await;

    assert_eq!(resp, Response::not_found());
}

#[tokio::test]
async fn test_files_without_directory_is_not_found() {
    let router = Router::new(None);
    let resp = router.respond(b"GET /files/report.txt HTTP/1.1\r\n\r\n").await;

    assert_eq!(resp, Response::not_found());
}

#[tokio::test]
async fn test_unknown_paths_are_not_found_for_any_method() {
    let router = Router::new(None);

    for method in ["GET", "POST", "PUT", "BREW"] {
        for path in ["/index.html", "/echo", "/files", "/userr-agent", "//"] {
            let raw = format!("{} {} HTTP/1.1\r\n\r\n", method, path);
            assert_eq!(router.respond(raw.as_bytes()).await, Response::not_found());
        }
    }
}

#[tokio::test]
async fn test_malformed_request_is_bad_request() {
    let router = Router::new(None);

    assert_eq!(router.respond(b"GET\r\n\r\n").await, Response::bad_request());
    assert_eq!(router.respond(b"\xff\xfe\r\n\r\n").await, Response::bad_request());
}
