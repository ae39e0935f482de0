use tinyhttpd::http::response::{Response, ResponseBuilder, StatusCode};

#[test]
fn test_status_code_as_u16() {
    assert_eq!(StatusCode::Ok.as_u16(), 200);
    assert_eq!(StatusCode::BadRequest.as_u16(), 400);
    assert_eq!(StatusCode::NotFound.as_u16(), 404);
}

#[test]
fn test_status_code_reason_phrase() {
    assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    assert_eq!(StatusCode::BadRequest.reason_phrase(), "Bad Request");
    assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
}

#[test]
fn test_status_code_from_u16() {
    for status in [StatusCode::Ok, StatusCode::BadRequest, StatusCode::NotFound] {
        assert_eq!(StatusCode::from_u16(status.as_u16()), Some(status));
    }
    assert_eq!(StatusCode::from_u16(500), None);
}

#[test]
fn test_response_builder_basic() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .content_type("text/plain")
        .body("Hello, World!")
        .build();

    assert_eq!(response.status, StatusCode::Ok);
    assert_eq!(response.content_type.as_deref(), Some("text/plain"));
    assert_eq!(response.body.as_ref(), b"Hello, World!");
}

#[test]
fn test_response_builder_empty() {
    let response = ResponseBuilder::new(StatusCode::NotFound).build();

    assert_eq!(response.content_type, None);
    assert!(response.body.is_empty());
}

#[test]
fn test_response_helpers() {
    assert_eq!(Response::ok(), Response::new(StatusCode::Ok));
    assert_eq!(Response::not_found().status, StatusCode::NotFound);
    assert_eq!(Response::bad_request().status, StatusCode::BadRequest);

    let text = Response::text("abc");
    assert_eq!(text.content_type.as_deref(), Some("text/plain"));

    let file = Response::octet_stream(vec![0u8, 1, 2]);
    assert_eq!(file.content_type.as_deref(), Some("application/octet-stream"));
    assert_eq!(file.body.as_ref(), &[0u8, 1, 2]);
}
