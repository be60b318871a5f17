use ghpm_lib::{
    GitHubClient, GitHubClientError, MutationOutcome, Privatizer, PrivatizerConfig,
    RepositoryHost, SkipReason,
};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN: &str = "test-token";

fn listing(full_name: &str, stars: u32, fork: bool) -> serde_json::Value {
    json!({
        "id": 1,
        "name": full_name.split('/').nth(1).unwrap_or(full_name),
        "full_name": full_name,
        "private": false,
        "stargazers_count": stars,
        "fork": fork,
    })
}

async fn mock_current_user(server: &MockServer, login: &str) {
    Mock::given(method("GET"))
        .and(path("/user"))
        .and(header("authorization", format!("Bearer {TOKEN}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "login": login, "id": 1 })))
        .mount(server)
        .await;
}

async fn mock_patch(server: &MockServer, full_name: &str, status: u16) {
    Mock::given(method("PATCH"))
        .and(path(format!("/repos/{full_name}")))
        .and(body_json(json!({ "private": true })))
        .respond_with(ResponseTemplate::new(status))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn resolves_current_user() {
    let server = MockServer::start().await;
    mock_current_user(&server, "octocat").await;

    let client = GitHubClient::new(server.uri(), TOKEN).unwrap();
    let identity = client.current_user().await.unwrap();

    assert_eq!("octocat", identity.login);
}

#[tokio::test]
async fn unauthorized_user_is_auth_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/user"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "message": "Bad credentials" })),
        )
        .mount(&server)
        .await;

    let client = GitHubClient::new(server.uri(), TOKEN).unwrap();
    let result = client.current_user().await;

    assert!(matches!(result, Err(GitHubClientError::Auth(_))));
}

#[tokio::test]
async fn fetches_public_page_with_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/octocat/repos"))
        .and(query_param("visibility", "public"))
        .and(query_param("per_page", "100"))
        .and(query_param("page", "2"))
        .and(header("accept", "application/vnd.github+json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            listing("octocat/tiny", 0, false),
            listing("octocat/spoon", 3, true),
        ])))
        .mount(&server)
        .await;

    let client = GitHubClient::new(server.uri(), TOKEN).unwrap();
    let repos = client.public_repos_page("octocat", 2).await.unwrap();

    assert_eq!(2, repos.len());
    assert_eq!("octocat/tiny", repos[0].full_name);
    assert_eq!(3, repos[1].stargazers_count);
    assert!(repos[1].fork);
}

#[tokio::test]
async fn malformed_page_is_fetch_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/octocat/repos"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = GitHubClient::new(server.uri(), TOKEN).unwrap();
    let result = client.public_repos_page("octocat", 1).await;

    assert!(matches!(result, Err(GitHubClientError::Fetch { page: 1, .. })));
}

#[tokio::test]
async fn classifies_patch_statuses() {
    let server = MockServer::start().await;
    mock_patch(&server, "octocat/ok", 200).await;
    mock_patch(&server, "octocat/web-only", 501).await;
    mock_patch(&server, "octocat/gone", 404).await;
    mock_patch(&server, "octocat/flaky", 502).await;

    let client = GitHubClient::new(server.uri(), TOKEN).unwrap();

    assert_eq!(MutationOutcome::Success, client.set_private("octocat/ok").await);
    assert_eq!(
        MutationOutcome::NotImplemented,
        client.set_private("octocat/web-only").await
    );
    assert_eq!(MutationOutcome::NotFound, client.set_private("octocat/gone").await);
    assert_eq!(
        MutationOutcome::ServerError,
        client.set_private("octocat/flaky").await
    );
}

#[tokio::test]
async fn unreachable_host_is_transport_error() {
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let client = GitHubClient::new(uri, TOKEN).unwrap();
    let outcome = client.set_private("octocat/tiny").await;

    assert!(matches!(outcome, MutationOutcome::TransportError(_)));
}

#[tokio::test]
async fn privatizes_only_eligible_repo_over_http() {
    let server = MockServer::start().await;
    mock_current_user(&server, "octocat").await;
    Mock::given(method("GET"))
        .and(path("/users/octocat/repos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            listing("octocat/octocat", 0, false),
            listing("octocat/tiny", 0, false),
            listing("octocat/famous", 5, false),
        ])))
        .expect(1)
        .mount(&server)
        .await;
    mock_patch(&server, "octocat/tiny", 200).await;

    let client = GitHubClient::new(server.uri(), TOKEN).unwrap();
    let report = Privatizer::new(client, PrivatizerConfig::default())
        .run()
        .await
        .unwrap();

    assert_eq!(1, report.privatized());
    assert_eq!(2, report.skipped());
    assert!(report
        .outcomes
        .contains(&(String::from("octocat/famous"), MutationOutcome::Skipped(SkipReason::Starred))));

    let patches = server
        .received_requests()
        .await
        .unwrap()
        .into_iter()
        .filter(|r| r.method.as_str() == "PATCH")
        .map(|r| r.url.path().to_string())
        .collect::<Vec<_>>();
    assert_eq!(vec![String::from("/repos/octocat/tiny")], patches);
}
