/// API integration tests
/// Tests complete HTTP request/response cycles against the mock backend
mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    routing::get,
    Router,
};
use common::{body_bytes, body_json, create_test_app, empty_request, json_request, shape};
use serde_json::json;
use tower::util::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use twoflac_core::Latency;
use twoflac_server::{create_router, middleware::handle_panic, AppState};

const ENDPOINTS: [(&str, &str); 4] = [
    ("/api/convert", "POST"),
    ("/api/details", "GET"),
    ("/api/download", "POST"),
    ("/api/search", "GET, POST"),
];

/// Every disallowed verb gets 405 and the endpoint's exact Allow list
#[tokio::test]
async fn test_method_not_allowed_lists_exact_methods() {
    let app = create_test_app();

    for (uri, allow) in ENDPOINTS {
        for method in ["GET", "POST", "PUT", "PATCH", "DELETE", "HEAD"] {
            if allow.split(", ").any(|m| m == method) {
                continue;
            }

            let response = app
                .clone()
                .oneshot(empty_request(method, uri))
                .await
                .unwrap();

            assert_eq!(
                response.status(),
                StatusCode::METHOD_NOT_ALLOWED,
                "{} {}",
                method,
                uri
            );
            assert_eq!(response.headers()[header::ALLOW], allow, "{} {}", method, uri);

            if method != "HEAD" {
                let body = body_json(response).await;
                assert_eq!(body, json!({ "error": "Method not allowed" }));
            }
        }
    }
}

/// OPTIONS is an empty 200 with CORS headers, with or without preflight headers
#[tokio::test]
async fn test_options_returns_empty_ok_with_cors() {
    let app = create_test_app();

    for (uri, _) in ENDPOINTS {
        let plain = empty_request("OPTIONS", uri);
        let preflight = Request::builder()
            .method("OPTIONS")
            .uri(uri)
            .header(header::ORIGIN, "https://example.com")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
            .body(Body::empty())
            .unwrap();

        for request in [plain, preflight] {
            let response = app.clone().oneshot(request).await.unwrap();

            assert_eq!(response.status(), StatusCode::OK);
            let headers = response.headers().clone();
            assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");

            let methods = headers[header::ACCESS_CONTROL_ALLOW_METHODS]
                .to_str()
                .unwrap()
                .to_string();
            for method in ["GET", "OPTIONS", "PATCH", "DELETE", "POST", "PUT"] {
                assert!(methods.contains(method), "missing {} in {}", method, methods);
            }

            let allowed_headers = headers[header::ACCESS_CONTROL_ALLOW_HEADERS]
                .to_str()
                .unwrap()
                .to_ascii_lowercase();
            assert!(allowed_headers.contains("content-type"));
            assert!(allowed_headers.contains("x-csrf-token"));

            assert!(body_bytes(response).await.is_empty());
        }
    }
}

/// Non-OPTIONS responses carry the same CORS allow-lists as preflight
#[tokio::test]
async fn test_cors_headers_on_regular_responses() {
    let app = create_test_app();

    let ok = json_request(
        "POST",
        "/api/convert",
        &json!({ "url": "https://youtu.be/x", "platform": "youtube" }),
    );
    let bad = Request::builder()
        .uri("/api/details")
        .header(header::ORIGIN, "https://example.com")
        .body(Body::empty())
        .unwrap();
    let not_allowed = empty_request("PUT", "/api/search");

    for (request, status) in [
        (ok, StatusCode::OK),
        (bad, StatusCode::BAD_REQUEST),
        (not_allowed, StatusCode::METHOD_NOT_ALLOWED),
    ] {
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), status);

        let headers = response.headers();
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert_eq!(
            headers[header::ACCESS_CONTROL_ALLOW_METHODS],
            "GET,OPTIONS,PATCH,DELETE,POST,PUT"
        );
        let allowed_headers = headers[header::ACCESS_CONTROL_ALLOW_HEADERS]
            .to_str()
            .unwrap();
        assert!(allowed_headers.contains("content-type"));
        assert!(allowed_headers.contains("x-api-version"));
    }
}

/// A number where a URL string belongs is an invalid URL, not a bad body
#[tokio::test]
async fn test_convert_non_string_url() {
    let app = create_test_app();

    let body = json!({ "url": 123, "platform": "youtube" });
    let response = app
        .oneshot(json_request("POST", "/api/convert", &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await, json!({ "error": "Invalid URL" }));
}

#[tokio::test]
async fn test_convert_requires_url_and_platform() {
    let app = create_test_app();

    for body in [
        json!({}),
        json!({ "url": "https://youtu.be/x" }),
        json!({ "platform": "youtube" }),
        json!({ "url": "", "platform": "youtube" }),
    ] {
        let response = app
            .clone()
            .oneshot(json_request("POST", "/api/convert", &body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{}", body);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "URL and platform are required" })
        );
    }
}

#[tokio::test]
async fn test_convert_rejects_invalid_url() {
    let app = create_test_app();

    let body = json!({ "url": "not-a-url", "platform": "youtube" });
    let response = app
        .oneshot(json_request("POST", "/api/convert", &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await, json!({ "error": "Invalid URL" }));
}

#[tokio::test]
async fn test_convert_success() {
    let app = create_test_app();

    let body = json!({ "url": "https://youtu.be/x", "platform": "youtube" });
    let response = app
        .oneshot(json_request("POST", "/api/convert", &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;

    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Conversion successful");
    assert_eq!(body["data"]["format"], "FLAC");
    assert_eq!(body["data"]["platform"], "youtube");
    assert_eq!(body["data"]["title"], "Music from youtube");
    assert_eq!(body["data"]["quality"], "Lossless");
    assert_eq!(body["data"]["downloadUrl"], "#");
    assert!(body["data"]["id"]
        .as_str()
        .unwrap()
        .starts_with("conversion_"));
    assert!(body["data"]["expiresAt"].as_str().unwrap().ends_with('Z'));
}

#[tokio::test]
async fn test_convert_uppercases_requested_format_and_echoes_platform() {
    let app = create_test_app();

    let body = json!({ "url": "https://example.com/a", "platform": "bandcamp", "format": "wav" });
    let response = app
        .oneshot(json_request("POST", "/api/convert", &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["format"], "WAV");
    assert_eq!(body["data"]["platform"], "bandcamp");
}

/// Bodies are parsed as JSON whatever the declared content type
#[tokio::test]
async fn test_body_parsed_without_json_content_type() {
    let app = create_test_app();

    let request = Request::builder()
        .method("POST")
        .uri("/api/convert")
        .header(header::CONTENT_TYPE, "text/plain")
        .body(Body::from(
            r#"{"url":"https://youtu.be/x","platform":"youtube"}"#,
        ))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_empty_body_counts_as_empty_object() {
    let app = create_test_app();

    let response = app
        .oneshot(empty_request("POST", "/api/download"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        json!({ "error": "URL is required" })
    );
}

#[tokio::test]
async fn test_invalid_json_body() {
    let app = create_test_app();

    let request = Request::builder()
        .method("POST")
        .uri("/api/convert")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        json!({ "error": "Invalid JSON body" })
    );
}

#[tokio::test]
async fn test_details_requires_id_and_platform() {
    let app = create_test_app();

    for uri in [
        "/api/details",
        "/api/details?id=abc",
        "/api/details?platform=spotify",
        "/api/details?id=&platform=spotify",
    ] {
        let response = app.clone().oneshot(empty_request("GET", uri)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{}", uri);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "ID and platform are required" })
        );
    }
}

#[tokio::test]
async fn test_details_success() {
    let app = create_test_app();

    let response = app
        .oneshot(empty_request("GET", "/api/details?id=abc&platform=spotify"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;

    assert_eq!(body["success"], true);
    assert!(body.get("message").is_none());
    assert_eq!(body["data"]["id"], "abc");
    assert_eq!(body["data"]["platform"], "spotify");
    assert_eq!(body["data"]["title"], "Detailed Music Info abc");
    assert_eq!(body["data"]["tracks"].as_array().unwrap().len(), 4);
    assert_eq!(body["data"]["credits"]["label"], "Record Label Inc.");
    assert_eq!(body["data"]["sampleRate"], "44.1 kHz");
    assert_eq!(body["data"]["popularity"], 85);
    assert_eq!(
        body["data"]["availableQualities"],
        json!(["16-bit/44.1kHz", "24-bit/96kHz", "24-bit/192kHz"])
    );
}

#[tokio::test]
async fn test_download_success_with_filename() {
    let app = create_test_app();

    let body = json!({ "url": "https://youtu.be/x", "format": "flac", "filename": "song.flac" });
    let response = app
        .oneshot(json_request("POST", "/api/download", &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;

    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "File ready for download");
    assert_eq!(body["data"]["filename"], "song.flac");
    assert_eq!(body["data"]["format"], "FLAC");
    assert_eq!(body["data"]["expiresIn"], "24 hours");
}

#[tokio::test]
async fn test_download_filename_fallback() {
    let app = create_test_app();

    let body = json!({ "url": "https://youtu.be/x" });
    let response = app
        .oneshot(json_request("POST", "/api/download", &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;

    let filename = body["data"]["filename"].as_str().unwrap();
    let stamp = filename
        .strip_prefix("download_")
        .and_then(|rest| rest.strip_suffix(".flac"))
        .unwrap();
    assert!(stamp.parse::<i64>().is_ok(), "{}", filename);
}

#[tokio::test]
async fn test_search_get() {
    let app = create_test_app();

    let response = app
        .oneshot(empty_request("GET", "/api/search?q=test"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;

    assert_eq!(body["success"], true);
    assert_eq!(body["query"], "test");
    assert_eq!(body["total"], 4);
    assert_eq!(body["platform"], "all");

    let results = body["results"].as_array().unwrap();
    assert_eq!(results.len(), 4);
    for result in results {
        assert!(result["title"].as_str().unwrap().contains("test"));
    }
    let platforms: Vec<&str> = results
        .iter()
        .map(|r| r["platform"].as_str().unwrap())
        .collect();
    assert_eq!(platforms, ["youtube", "spotify", "soundcloud", "youtube"]);
}

#[tokio::test]
async fn test_search_post() {
    let app = create_test_app();

    let response = app
        .oneshot(json_request("POST", "/api/search", &json!({ "query": "jazz" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["query"], "jazz");
    assert_eq!(body["results"][1]["title"], "Best of jazz");
}

#[tokio::test]
async fn test_search_requires_query() {
    let app = create_test_app();

    let requests = [
        empty_request("GET", "/api/search"),
        empty_request("GET", "/api/search?q="),
        json_request("POST", "/api/search", &json!({})),
        json_request("POST", "/api/search", &json!({ "q": "test" })),
    ];

    for request in requests {
        let response = app.clone().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Search query is required" })
        );
    }
}

/// Repeated requests produce the same shape, differing only in timestamps
#[tokio::test]
async fn test_repeated_requests_are_structurally_identical() {
    let app = create_test_app();

    let requests: [fn() -> Request<Body>; 5] = [
        || {
            json_request(
                "POST",
                "/api/convert",
                &json!({ "url": "https://youtu.be/x", "platform": "youtube" }),
            )
        },
        || empty_request("GET", "/api/details?id=abc&platform=spotify"),
        || json_request("POST", "/api/download", &json!({ "url": "https://youtu.be/x" })),
        || empty_request("GET", "/api/search?q=loop"),
        || json_request("POST", "/api/search", &json!({ "query": "loop" })),
    ];

    for make_request in requests {
        let first = body_json(app.clone().oneshot(make_request()).await.unwrap()).await;
        let second = body_json(app.clone().oneshot(make_request()).await.unwrap()).await;

        assert_eq!(first["success"], true);
        assert_eq!(shape(&first), shape(&second));
    }

    let search = |v: &serde_json::Value| -> Vec<String> {
        v["results"]
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["title"].as_str().unwrap().to_string())
            .collect()
    };
    let first = body_json(app.clone().oneshot(requests[3]()).await.unwrap()).await;
    let second = body_json(app.oneshot(requests[3]()).await.unwrap()).await;
    assert_eq!(search(&first), search(&second));
}

#[tokio::test]
async fn test_health() {
    let app = create_test_app();

    let response = app
        .oneshot(empty_request("GET", "/api/health"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_unknown_api_path_is_json_404() {
    let app = create_test_app();

    let response = app
        .oneshot(empty_request("GET", "/api/nope"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await, json!({ "error": "Not found" }));
}

#[tokio::test]
async fn test_landing_page_renders() {
    let app = create_test_app();

    let response = app.oneshot(empty_request("GET", "/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers()[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("text/html"));

    let html = String::from_utf8(body_bytes(response).await).unwrap();
    assert!(html.contains("<title>2FLAC"));
    assert!(html.contains(r#"value="musik terbaru""#));
    assert!(html.contains("result-card"));
}

#[tokio::test]
async fn test_static_dir_fallback() {
    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(dir.path().join("style.css"), "body { color: red; }").unwrap();

    let app = create_router(
        AppState::mock(Latency::none()),
        Some(dir.path().to_path_buf()),
    );

    let response = app
        .clone()
        .oneshot(empty_request("GET", "/style.css"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_bytes(response).await, b"body { color: red; }");

    let response = app
        .oneshot(empty_request("GET", "/api/search?q=still-api"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test(start_paused = true)]
async fn test_default_latency_is_applied() {
    let app = create_router(AppState::mock(Latency::default()), None);
    let started = tokio::time::Instant::now();

    let body = json!({ "url": "https://youtu.be/x", "platform": "youtube" });
    let response = app
        .oneshot(json_request("POST", "/api/convert", &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(started.elapsed() >= std::time::Duration::from_millis(1000));
}

#[tokio::test]
async fn test_handler_panic_becomes_500() {
    async fn boom() -> &'static str {
        panic!("handler exploded")
    }

    let app = Router::new()
        .route("/boom", get(boom))
        .layer(CatchPanicLayer::custom(handle_panic));

    let response = app.oneshot(empty_request("GET", "/boom")).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(response).await,
        json!({ "error": "Internal server error" })
    );
}
