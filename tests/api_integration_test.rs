use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use github_users_api::api::{handlers::AppState, routes::create_router};
use github_users_api::api::models::{RepositoryPage, UserDetails, UserPage};
use github_users_api::Settings;
use tower::ServiceExt;

fn app_for(server: &mockito::Server) -> Router {
    let upstream = server.url();
    let settings = Settings::from_vars(|key| match key {
        "GITHUB_API_URL" => Some(upstream.clone()),
        "PUBLIC_BASE_URL" => Some("http://localhost:8080".to_string()),
        _ => None,
    })
    .expect("Failed to build settings");
    settings.validate().expect("Settings should be valid");

    let state = AppState::from_settings(&settings).expect("Failed to build app state");
    create_router(state)
}

async fn get_body(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, bytes.to_vec())
}

#[tokio::test]
async fn test_users_page_since_46() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/users")
        .match_query(mockito::Matcher::UrlEncoded("since".into(), "46".into()))
        .with_status(200)
        .with_header("content-type", "application/json; charset=utf-8")
        .with_header(
            "link",
            "<https://api.github.com/users?since=48>; rel=\"next\", \
             <https://api.github.com/users{?since}>; rel=\"first\"",
        )
        .with_body(
            r#"[{"login":"bmizerany","id":47,"node_id":"MDQ6VXNlcjQ3","avatar_url":"https://avatars.githubusercontent.com/u/47?v=4","type":"User","site_admin":false},
                {"login":"jnewland","id":48,"node_id":"MDQ6VXNlcjQ4","avatar_url":"https://avatars.githubusercontent.com/u/48?v=4","type":"User","site_admin":false}]"#,
        )
        .create_async()
        .await;

    let (status, body) = get_body(app_for(&server), "/api/users?since=46").await;
    assert_eq!(status, StatusCode::OK);

    let page: UserPage = serde_json::from_slice(&body).expect("Invalid user page");
    let ids: Vec<u64> = page.content.iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![47, 48]);
    assert!(page.content.iter().all(|u| u.id > 46));
    assert_eq!(
        page.content[0].avatar_url,
        "https://avatars.githubusercontent.com/u/47?v=4"
    );
    assert_eq!(
        page.next.as_deref(),
        Some("http://localhost:8080/api/users?since=48")
    );
}

#[tokio::test]
async fn test_user_details_match_upstream() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/users/octocat")
        .with_status(200)
        .with_body(
            r#"{"login":"octocat","id":583231,"node_id":"MDQ6VXNlcjU4MzIzMQ==",
                "avatar_url":"https://avatars.githubusercontent.com/u/583231?v=4",
                "html_url":"https://github.com/octocat","type":"User",
                "name":"The Octocat","company":"@github","blog":"https://github.blog",
                "location":"San Francisco","email":null,"bio":null,
                "public_repos":8,"public_gists":8,"followers":9000,"following":9,
                "created_at":"2011-01-25T18:44:36Z","updated_at":"2024-01-22T12:14:08Z"}"#,
        )
        .create_async()
        .await;

    let (status, body) = get_body(app_for(&server), "/api/users/octocat/details").await;
    assert_eq!(status, StatusCode::OK);

    let details: UserDetails = serde_json::from_slice(&body).expect("Invalid user details");
    assert_eq!(details.login, "octocat");
    assert_eq!(details.id, 583231);
    assert_eq!(
        details.avatar_url,
        "https://avatars.githubusercontent.com/u/583231?v=4"
    );
    assert_eq!(details.name.as_deref(), Some("The Octocat"));
    assert_eq!(details.followers, 9000);
}

#[tokio::test]
async fn test_unknown_user_details_is_404() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/users/no-such-user-xyz")
        .with_status(404)
        .with_body(r#"{"message":"Not Found","documentation_url":"https://docs.github.com"}"#)
        .create_async()
        .await;

    let (status, body) = get_body(app_for(&server), "/api/users/no-such-user-xyz/details").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    let fields = json.as_object().unwrap();
    assert_eq!(fields.len(), 1);
    assert!(fields["error"].is_string());
}

#[tokio::test]
async fn test_user_repositories_match_upstream() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/users/john/repos")
        .with_status(200)
        .with_body(
            r#"[{"id":1296269,"node_id":"MDEwOlJlcG9zaXRvcnkxMjk2MjY5","name":"Hello-World",
                 "full_name":"john/Hello-World","private":false,"description":"My first repo",
                 "html_url":"https://github.com/john/Hello-World","fork":false,
                 "language":"C","stargazers_count":80,"forks_count":9,
                 "created_at":"2011-01-26T19:01:12Z","updated_at":"2011-01-26T19:14:43Z"},
                {"id":18221276,"node_id":"MDEwOlJlcG9zaXRvcnkxODIyMTI3Ng==","name":"git-consortium",
                 "full_name":"john/git-consortium","private":false,"description":null,
                 "html_url":"https://github.com/john/git-consortium","fork":false,
                 "language":null,"stargazers_count":20,"forks_count":3,
                 "created_at":"2014-03-28T17:55:38Z","updated_at":"2024-01-01T00:00:00Z"}]"#,
        )
        .create_async()
        .await;

    let (status, body) = get_body(app_for(&server), "/api/users/john/repos").await;
    assert_eq!(status, StatusCode::OK);

    let page: RepositoryPage = serde_json::from_slice(&body).expect("Invalid repository page");
    assert_eq!(page.content.len(), 2);

    assert_eq!(page.content[0].id, 1296269);
    assert_eq!(page.content[0].node_id, "MDEwOlJlcG9zaXRvcnkxMjk2MjY5");
    assert_eq!(page.content[0].name, "Hello-World");

    assert_eq!(page.content[1].id, 18221276);
    assert_eq!(page.content[1].node_id, "MDEwOlJlcG9zaXRvcnkxODIyMTI3Ng==");
    assert_eq!(page.content[1].name, "git-consortium");
}

#[tokio::test]
async fn test_malformed_upstream_is_server_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/users/john/repos")
        .with_status(200)
        .with_body(r#"{"unexpected":"object"}"#)
        .create_async()
        .await;

    let (status, _) = get_body(app_for(&server), "/api/users/john/repos").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn test_upstream_timeout_is_gateway_timeout() {
    // Accepts connections and never writes a response
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind silent upstream");
    let upstream = format!("http://{}", listener.local_addr().unwrap());
    let silent = tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });

    let settings = Settings::from_vars(|key| match key {
        "GITHUB_API_URL" => Some(upstream.clone()),
        "GITHUB_TIMEOUT_SECONDS" => Some("1".to_string()),
        _ => None,
    })
    .expect("Failed to build settings");
    let state = AppState::from_settings(&settings).expect("Failed to build app state");

    let (status, body) = get_body(create_router(state), "/api/users/octocat/details").await;
    silent.abort();

    assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
    let json: serde_json::Value = serde_json::from_slice(&body).expect("Error body is not JSON");
    assert_eq!(json["error"], "GitHub API request timed out");
}
