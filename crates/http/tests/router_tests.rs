use apidocs_core::{Catalog, EndpointDescriptor, HttpMethod, SiteConfig};
use apidocs_http::{create_router, AppState};
use axum::body::Body;
use axum::http::{Request, StatusCode};
use std::sync::Arc;
use tower::ServiceExt;

fn builtin_router() -> axum::Router {
    create_router(Arc::new(AppState::builtin(SiteConfig::default())))
}

async fn get(router: axum::Router, uri: &str) -> (StatusCode, String) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

fn sidebar_sections(html: &str) -> Vec<&str> {
    html.split(r#"data-category=""#)
        .skip(1)
        .filter_map(|rest| rest.split('"').next())
        .collect()
}

#[tokio::test]
async fn test_home_page_renders_welcome() {
    let (status, body) = get(builtin_router(), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Welcome to the API Docs"));
    assert_eq!(sidebar_sections(&body), ["User", "Post", "Comment", "Authentication"]);
}

#[tokio::test]
async fn test_listing_page_lists_every_endpoint() {
    let (status, body) = get(builtin_router(), "/api").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<h1>API Reference</h1>"));
    for endpoint in Catalog::builtin() {
        assert!(body.contains(&endpoint.title), "missing {}", endpoint.id);
    }
}

#[tokio::test]
async fn test_listing_page_with_trailing_slash() {
    let (status, body) = get(builtin_router(), "/api/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<h1>API Reference</h1>"));
}

#[tokio::test]
async fn test_detail_page_resolves_exact_id() {
    let (status, body) = get(builtin_router(), "/api/get-user").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<h1>Get User Profile</h1>"));
    assert!(body.contains("Request Example"));
    assert!(body.contains("Response Example"));
}

#[tokio::test]
async fn test_detail_page_unknown_id_is_404() {
    for uri in ["/api/get-users", "/api/GET-USER", "/api/get-user%20"] {
        let (status, body) = get(builtin_router(), uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert!(body.contains("404 - Not Found"), "{uri}");
        assert!(!body.contains("Request Example"), "{uri}");
    }
}

#[tokio::test]
async fn test_percent_encoded_segment_is_decoded_before_lookup() {
    let (status, body) = get(builtin_router(), "/api/get%2Duser").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<h1>Get User Profile</h1>"));
}

#[tokio::test]
async fn test_unknown_path_renders_not_found_page() {
    let (status, body) = get(builtin_router(), "/authentication").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("404 - Not Found"));
}

#[tokio::test]
async fn test_sidebar_query_filters_groups() {
    let (status, body) = get(builtin_router(), "/api?q=TOKEN").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(sidebar_sections(&body), ["Authentication"]);
    assert!(body.contains(r#"value="TOKEN""#));
}

#[tokio::test]
async fn test_sidebar_query_without_matches() {
    let (_, body) = get(builtin_router(), "/?q=nomatch").await;
    assert!(sidebar_sections(&body).is_empty());
    assert!(body.contains("No endpoints match"));
}

#[tokio::test]
async fn test_json_endpoints_in_catalog_order() {
    let (status, body) = get(builtin_router(), "/json/endpoints").await;
    assert_eq!(status, StatusCode::OK);
    let endpoints: Vec<EndpointDescriptor> = serde_json::from_str(&body).unwrap();
    assert_eq!(endpoints, Catalog::builtin().endpoints());
}

#[tokio::test]
async fn test_json_single_endpoint() {
    let (status, body) = get(builtin_router(), "/json/endpoints/refresh-token").await;
    assert_eq!(status, StatusCode::OK);
    let endpoint: EndpointDescriptor = serde_json::from_str(&body).unwrap();
    assert_eq!(endpoint.method, HttpMethod::Post);
    assert_eq!(endpoint.path, "/api/auth/refresh");
}

#[tokio::test]
async fn test_json_single_endpoint_not_found() {
    let (status, body) = get(builtin_router(), "/json/endpoints/get-users").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["error"], "Endpoint not found: get-users");
}

#[tokio::test]
async fn test_json_groups_omit_empty_categories() {
    let (status, body) = get(builtin_router(), "/json/groups?q=post").await;
    assert_eq!(status, StatusCode::OK);
    let groups: serde_json::Value = serde_json::from_str(&body).unwrap();
    let groups = groups.as_array().unwrap();
    let labels: Vec<_> = groups.iter().map(|g| g["label"].as_str().unwrap()).collect();
    // "post" also appears in the comment descriptions.
    assert_eq!(labels, ["Post", "Comment"]);
    assert_eq!(groups[0]["icon"], "file-text");
}

#[tokio::test]
async fn test_json_groups_empty_query_returns_all_non_empty() {
    let (_, body) = get(builtin_router(), "/json/groups").await;
    let groups: serde_json::Value = serde_json::from_str(&body).unwrap();
    let total: usize =
        groups.as_array().unwrap().iter().map(|g| g["endpoints"].as_array().unwrap().len()).sum();
    assert_eq!(total, Catalog::builtin().len());
}

#[tokio::test]
async fn test_custom_catalog_omits_comment_section() {
    let catalog = Catalog::new(vec![
        EndpointDescriptor::new(
            "login",
            "User Login",
            HttpMethod::Post,
            "/api/auth/login",
            "Authenticate a user.",
        ),
        EndpointDescriptor::new(
            "refresh-token",
            "Refresh Token",
            HttpMethod::Post,
            "/api/auth/refresh",
            "Refresh an expired authentication token.",
        ),
    ])
    .unwrap();
    let catalog: &'static Catalog = Box::leak(Box::new(catalog));
    let router = create_router(Arc::new(AppState::new(catalog, SiteConfig::default())));

    let (_, body) = get(router.clone(), "/api").await;
    assert_eq!(sidebar_sections(&body), ["Authentication"]);

    let (_, body) = get(router, "/api?q=token").await;
    assert_eq!(sidebar_sections(&body), ["Authentication"]);
    assert!(body.contains(r#"href="/api/refresh-token""#));
    let sidebar = body.split("<main").next().unwrap();
    let sidebar = sidebar.split(r#"<aside class="sidebar">"#).nth(1).unwrap();
    assert!(!sidebar.contains(r#"href="/api/login""#));
}

fn hrefs(html: &str) -> Vec<String> {
    html.split(r#"href=""#)
        .skip(1)
        .filter_map(|rest| rest.split('"').next())
        .map(str::to_owned)
        .collect()
}

#[tokio::test]
async fn test_base_path_prefixes_links() {
    let router = create_router(Arc::new(AppState::builtin(SiteConfig::with_base_path(
        "/Api_Documentation_Template",
    ))));
    let (status, body) = get(router, "/Api_Documentation_Template/api").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"href="/Api_Documentation_Template/api/get-user""#));
    assert!(body.contains(r#"action="/Api_Documentation_Template/api""#));
}

#[tokio::test]
async fn test_rendered_links_resolve_under_base_path() {
    let router = create_router(Arc::new(AppState::builtin(SiteConfig::with_base_path("/docs"))));
    let (_, listing) = get(router.clone(), "/docs/api").await;
    let links = hrefs(&listing);
    assert!(links.contains(&"/docs/".to_owned()));
    assert!(links.contains(&"/docs/api/get-user".to_owned()));
    for link in links {
        let (status, _) = get(router.clone(), &link).await;
        assert_eq!(status, StatusCode::OK, "following rendered link {link}");
    }

    let (status, body) = get(router.clone(), "/docs/api?q=token").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(sidebar_sections(&body), ["Authentication"]);

    let (status, _) = get(router.clone(), "/docs").await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = get(router.clone(), "/docs/json/endpoints/login").await;
    assert_eq!(status, StatusCode::OK);
    let (status, body) = get(router, "/api/get-user").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("404 - Not Found"));
}

#[tokio::test]
async fn test_rendered_links_resolve_at_root() {
    let (_, listing) = get(builtin_router(), "/api").await;
    let links = hrefs(&listing);
    assert_eq!(
        links.iter().filter(|link| link.starts_with("/api/")).count(),
        Catalog::builtin().len() * 2 + 1,
        "listing card + sidebar entry per endpoint, plus the navbar auth item"
    );
    for link in links {
        let (status, _) = get(builtin_router(), &link).await;
        assert_eq!(status, StatusCode::OK, "following rendered link {link}");
    }
}

#[tokio::test]
async fn test_health_and_version() {
    let (status, body) = get(builtin_router(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");

    let (status, body) = get(builtin_router(), "/version").await;
    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}
