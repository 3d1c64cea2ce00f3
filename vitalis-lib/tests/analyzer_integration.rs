//! Integration tests for registry lookups and end-to-end dependency analysis

use chrono::{DateTime, Duration, TimeZone, Utc};
use core::time::Duration as StdDuration;
use vitalis_lib::analysis::{Analyzer, NO_SUPPORTED_REPOSITORY, Verdict};
use vitalis_lib::health::{EvaluatorSettings, HealthEvaluator, Policy};
use vitalis_lib::manifest::{Dependency, DependencySource};
use vitalis_lib::registry::{ProviderResult, RegistryClient};
use vitalis_lib::repo::Platform;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TIMEOUT: StdDuration = StdDuration::from_secs(10);

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
}

fn days_ago(days: i64) -> String {
    (now() - Duration::days(days)).format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

fn registry(server: &MockServer) -> RegistryClient {
    RegistryClient::new(format!("{}/pypi", server.uri()), format!("{}/npm", server.uri()), TIMEOUT).unwrap()
}

fn analyzer(server: &MockServer) -> Analyzer {
    let settings = EvaluatorSettings {
        github_api_url: server.uri(),
        gitlab_api_url: server.uri(),
        request_timeout: TIMEOUT,
        ..EvaluatorSettings::default()
    };

    Analyzer::new(registry(server), HealthEvaluator::new(&settings, now()).unwrap(), 2)
}

async fn mount_json(server: &MockServer, route: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

async fn mount_requests_on_pypi(server: &MockServer) {
    mount_json(
        server,
        "/pypi/requests/json",
        serde_json::json!({
            "info": {
                "summary": "Python HTTP for Humans.",
                "version": "2.31.0",
                "project_urls": {
                    "Documentation": "https://requests.readthedocs.io",
                    "Source": "https://github.com/psf/requests"
                }
            },
            "releases": {
                "2.31.0": [{"upload_time_iso_8601": "2023-05-22T15:12:44.175363Z"}]
            }
        }),
    )
    .await;
}

async fn mount_github_repo(server: &MockServer, owner_repo: &str, pushed_days_ago: i64, files: &[&str]) {
    mount_json(
        server,
        &format!("/repos/{owner_repo}"),
        serde_json::json!({"pushed_at": days_ago(pushed_days_ago), "stargazers_count": 10, "forks_count": 2}),
    )
    .await;
    mount_json(server, &format!("/repos/{owner_repo}/issues"), serde_json::json!([])).await;

    let entries: Vec<_> = files.iter().map(|name| serde_json::json!({"name": name})).collect();
    mount_json(server, &format!("/repos/{owner_repo}/contents"), serde_json::Value::Array(entries)).await;
}

#[tokio::test]
#[cfg_attr(miri, ignore = "Miri cannot open sockets")]
async fn test_fetch_pypi_found() {
    let server = MockServer::start().await;
    mount_requests_on_pypi(&server).await;

    let result = registry(&server).fetch_pypi("requests").await.unwrap();
    let ProviderResult::Found(package) = result else {
        unreachable!("expected package metadata, got {result:?}");
    };

    assert_eq!(package.info.version.as_deref(), Some("2.31.0"));
    assert_eq!(package.latest_release_date(), Some("2023-05-22T15:12:44.175363Z"));
}

#[tokio::test]
#[cfg_attr(miri, ignore = "Miri cannot open sockets")]
async fn test_fetch_not_found_and_errors() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/npm/broken"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/npm/garbled"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let client = registry(&server);
    assert!(matches!(client.fetch_pypi("missing").await.unwrap(), ProviderResult::NotFound));
    assert!(matches!(client.fetch_npm("broken").await.unwrap(), ProviderResult::Error(_)));
    assert!(matches!(client.fetch_npm("garbled").await.unwrap(), ProviderResult::Error(_)));
}

#[tokio::test]
#[cfg_attr(miri, ignore = "Miri cannot open sockets")]
async fn test_fetch_npm_found() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/npm/express",
        serde_json::json!({
            "description": "Fast, unopinionated, minimalist web framework",
            "dist-tags": {"latest": "4.18.2"},
            "time": {"4.18.2": "2022-10-08T20:55:05.000Z"},
            "repository": {"type": "git", "url": "git+https://github.com/expressjs/express.git"}
        }),
    )
    .await;

    let package = registry(&server).fetch_npm("express").await.unwrap().found().unwrap();
    assert_eq!(package.latest_version(), Some("4.18.2"));
    assert_eq!(package.latest_release_date(), Some("2022-10-08T20:55:05.000Z"));
}

#[tokio::test]
#[cfg_attr(miri, ignore = "Miri cannot open sockets")]
async fn test_analyze_end_to_end() {
    let server = MockServer::start().await;

    mount_requests_on_pypi(&server).await;
    mount_github_repo(&server, "psf/requests", 5, &["README.md", "LICENSE"]).await;

    mount_json(
        &server,
        "/npm/lodash",
        serde_json::json!({
            "description": "Lodash modular utilities.",
            "dist-tags": {"latest": "4.17.21"},
            "repository": "https://github.com/lodash/lodash"
        }),
    )
    .await;
    mount_github_repo(&server, "lodash/lodash", 800, &["README.md", "LICENSE"]).await;

    mount_json(
        &server,
        "/npm/left-pad",
        serde_json::json!({
            "dist-tags": {"latest": "1.3.0"},
            "repository": {"type": "git", "url": "https://bitbucket.org/someone/left-pad"}
        }),
    )
    .await;

    mount_json(&server, "/pypi/internal/json", serde_json::json!({"info": {"version": "1.0"}})).await;

    let dependencies = vec![
        Dependency::new("requests", Some("2.31.0".to_string()), DependencySource::PyPi, "requests==2.31.0"),
        Dependency::new("lodash", Some("^4.17.21".to_string()), DependencySource::Npm, "lodash: ^4.17.21"),
        Dependency::new("left-pad", None, DependencySource::Npm, "left-pad: *"),
        Dependency::new("internal", None, DependencySource::Poetry, "internal: None"),
        Dependency::new("cudatoolkit", Some("11.8".to_string()), DependencySource::Conda, "cudatoolkit=11.8"),
        Dependency::new("zope.interface", None, DependencySource::Pip, "zope.interface"),
    ];

    let reports = analyzer(&server).analyze(&dependencies, &Policy::default()).await;

    let names: Vec<_> = reports.iter().map(|r| r.dependency.as_str()).collect();
    assert_eq!(names, ["requests", "lodash", "left-pad", "internal", "cudatoolkit", "zope.interface"]);

    let requests = &reports[0];
    assert_eq!(requests.verdict(), Verdict::Healthy);
    let info = requests.package_info.as_ref().unwrap();
    assert_eq!(info.repository_url.as_deref(), Some("https://github.com/psf/requests"));
    assert_eq!(info.repository_platform, Some(Platform::GitHub));
    assert_eq!(info.summary.as_deref(), Some("Python HTTP for Humans."));
    assert_eq!(info.created_date.as_deref(), Some("2023-05-22T15:12:44.175363Z"));

    let lodash = &reports[1];
    assert_eq!(lodash.verdict(), Verdict::Unhealthy);
    let health = lodash.health.as_ref().unwrap();
    assert_eq!(health.warnings, vec!["Repository has been inactive for over 365 days".to_string()]);

    let left_pad = &reports[2];
    assert_eq!(left_pad.verdict(), Verdict::Unchecked);
    assert_eq!(left_pad.message.as_deref(), Some(NO_SUPPORTED_REPOSITORY));
    assert_eq!(
        left_pad.package_info.as_ref().unwrap().repository_platform,
        Some(Platform::Bitbucket)
    );
    assert!(!left_pad.error);

    let internal = &reports[3];
    assert_eq!(internal.message.as_deref(), Some(NO_SUPPORTED_REPOSITORY));
    assert_eq!(internal.package_info.as_ref().unwrap().repository_url, None);

    let cudatoolkit = &reports[4];
    assert!(cudatoolkit.error);
    assert_eq!(
        cudatoolkit.message.as_deref(),
        Some("Could not fetch info for cudatoolkit from PyPI. This may be a conda-only or system package.")
    );

    let zope = &reports[5];
    assert!(zope.error);
    assert!(zope.message.as_deref().unwrap().contains("invalid package name"));
}
