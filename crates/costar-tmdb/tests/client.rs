//! Integration tests for `TmdbClient` using wiremock HTTP mocks.

use costar_core::{FranchiseConfig, MediaKind};
use costar_tmdb::{ClientSettings, TmdbClient, TmdbError};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn settings() -> ClientSettings {
    ClientSettings {
        max_retries: 2,
        backoff_base_ms: 0,
        max_concurrent_requests: 4,
        max_discover_pages: 5,
        ..ClientSettings::default()
    }
}

fn test_client(base_url: &str) -> TmdbClient {
    TmdbClient::with_base_url("test-key", settings(), base_url)
        .expect("client construction should not fail")
}

fn person_body(id: i64, name: &str, movies: &[(i64, &str, &str, f64, &str)]) -> serde_json::Value {
    let cast: Vec<serde_json::Value> = movies
        .iter()
        .map(|(id, title, character, popularity, date)| {
            serde_json::json!({
                "id": id,
                "title": title,
                "character": character,
                "popularity": popularity,
                "release_date": date
            })
        })
        .collect();
    serde_json::json!({
        "id": id,
        "name": name,
        "birthday": "1965-04-04",
        "place_of_birth": "Manhattan, New York, USA",
        "profile_path": "/5qHNjhtjMD4YWH3UP0rm4tKwxCL.jpg",
        "movie_credits": { "cast": cast, "crew": [] },
        "tv_credits": {
            "cast": [
                { "id": 1400, "name": "Ally McBeal", "character": "Larry Paul", "first_air_date": "1997-09-08" }
            ],
            "crew": []
        }
    })
}

async fn mount_movie(server: &MockServer, id: i64, revenue: u64) {
    Mock::given(method("GET"))
        .and(path(format!("/movie/{id}")))
        .and(query_param("api_key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": id,
            "title": format!("Movie {id}"),
            "release_date": "2012-04-25",
            "revenue": revenue
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn get_person_requests_appended_credits() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/person/3223"))
        .and(query_param("api_key", "test-key"))
        .and(query_param("append_to_response", "movie_credits,tv_credits"))
        .respond_with(ResponseTemplate::new(200).set_body_json(person_body(
            3223,
            "Robert Downey Jr.",
            &[(1726, "Iron Man", "Tony Stark", 60.2, "2008-04-30")],
        )))
        .expect(1)
        .mount(&server)
        .await;

    let person = test_client(&server.uri())
        .get_person(3223)
        .await
        .expect("should parse person");

    assert_eq!(person.id, 3223);
    assert_eq!(person.name, "Robert Downey Jr.");
    assert_eq!(person.movie_credits.cast.len(), 1);
    assert_eq!(person.tv_credits.cast[0].name.as_deref(), Some("Ally McBeal"));
}

#[tokio::test]
async fn fetch_performer_enriches_revenue_and_tolerates_missing_movies() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/person/3223"))
        .respond_with(ResponseTemplate::new(200).set_body_json(person_body(
            3223,
            "Robert Downey Jr.",
            &[
                (1726, "Iron Man", "Tony Stark", 60.2, "2008-04-30"),
                (24428, "The Avengers", "Tony Stark / Iron Man", 98.1, "2012-04-25"),
                (9999, "Lost Film", "Extra", 0.5, ""),
                (5000, "Indie", "Lead", 2.0, "2003"),
            ],
        )))
        .mount(&server)
        .await;
    mount_movie(&server, 1726, 585_174_222).await;
    mount_movie(&server, 24428, 1_518_812_988).await;
    mount_movie(&server, 5000, 0).await;
    Mock::given(method("GET"))
        .and(path("/movie/9999"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "success": false,
            "status_code": 34,
            "status_message": "The resource you requested could not be found."
        })))
        .mount(&server)
        .await;

    let performer = test_client(&server.uri())
        .fetch_performer(3223)
        .await
        .expect("fetch should succeed");

    let revenues: Vec<(i64, Option<u64>)> = performer
        .movie_credits
        .iter()
        .map(|c| (c.id, c.revenue))
        .collect();
    assert_eq!(
        revenues,
        vec![
            (1726, Some(585_174_222)),
            (24428, Some(1_518_812_988)),
            (9999, None),
            (5000, None),
        ]
    );
    assert_eq!(performer.movie_credits[3].release_year(), Some(2003));
    assert_eq!(performer.tv_credits[0].title, "Ally McBeal");
    assert_eq!(
        performer.profile.place_of_birth.as_deref(),
        Some("Manhattan, New York, USA")
    );
}

#[tokio::test]
async fn unknown_person_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/person/0"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let err = test_client(&server.uri())
        .fetch_performer(0)
        .await
        .expect_err("should fail");
    assert!(matches!(err, TmdbError::NotFound { ref path } if path == "/person/0"));
}

#[tokio::test]
async fn invalid_key_surfaces_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "success": false,
            "status_code": 7,
            "status_message": "Invalid API key: You must be granted a valid key."
        })))
        .expect(1)
        .mount(&server)
        .await;

    let err = test_client(&server.uri())
        .get_person(1)
        .await
        .expect_err("should fail");
    match err {
        TmdbError::Api {
            status_code,
            message,
            ..
        } => {
            assert_eq!(status_code, 7);
            assert!(message.contains("Invalid API key"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn server_errors_are_retried_until_exhausted() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/movie/1"))
        .respond_with(ResponseTemplate::new(503))
        .expect(3)
        .mount(&server)
        .await;

    let err = test_client(&server.uri())
        .get_movie(1)
        .await
        .expect_err("should fail");
    assert!(matches!(err, TmdbError::UnexpectedStatus { status: 503, .. }));
}

#[tokio::test]
async fn rate_limit_is_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/movie/1"))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "0"))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    mount_movie(&server, 1, 10).await;

    let movie = test_client(&server.uri())
        .get_movie(1)
        .await
        .expect("second attempt should succeed");
    assert_eq!(movie.revenue, Some(10));
}

#[tokio::test]
async fn malformed_body_is_a_deserialize_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/person/5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "five"
        })))
        .mount(&server)
        .await;

    let err = test_client(&server.uri())
        .get_person(5)
        .await
        .expect_err("should fail");
    assert!(matches!(err, TmdbError::Deserialize { ref context, .. } if context == "person(id=5)"));
}

fn discover_body(page: u32, total_pages: u32, ids: &[i64]) -> serde_json::Value {
    let results: Vec<serde_json::Value> = ids.iter().map(|id| serde_json::json!({ "id": id })).collect();
    serde_json::json!({
        "page": page,
        "results": results,
        "total_pages": total_pages,
        "total_results": 0
    })
}

async fn mount_discover_page(server: &MockServer, kind: &str, page: u32, total: u32, ids: &[i64]) {
    Mock::given(method("GET"))
        .and(path(format!("/discover/{kind}")))
        .and(query_param("with_companies", "420|7505"))
        .and(query_param("page", page.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(discover_body(page, total, ids)))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn discover_all_fetches_every_page_in_order() {
    let server = MockServer::start().await;
    mount_discover_page(&server, "movie", 1, 3, &[1, 2]).await;
    mount_discover_page(&server, "movie", 2, 3, &[3, 4]).await;
    mount_discover_page(&server, "movie", 3, 3, &[5]).await;

    let ids = test_client(&server.uri())
        .discover_all(MediaKind::Movie, &[420, 7505])
        .await
        .expect("discovery should succeed");
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
}

#[tokio::test]
async fn discover_all_refuses_runaway_pagination() {
    let server = MockServer::start().await;
    mount_discover_page(&server, "tv", 1, 50, &[1]).await;

    let err = test_client(&server.uri())
        .discover_all(MediaKind::Tv, &[420, 7505])
        .await
        .expect_err("should hit the page guard");
    assert!(matches!(
        err,
        TmdbError::PaginationLimit {
            total_pages: 50,
            max_pages: 5,
            ..
        }
    ));
}

#[tokio::test]
async fn discover_all_skips_api_without_companies() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let ids = test_client(&server.uri())
        .discover_all(MediaKind::Tv, &[])
        .await
        .expect("no request should be made");
    assert!(ids.is_empty());
}

#[tokio::test]
async fn fetch_comparison_resolves_both_performers_and_franchise() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/person/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(person_body(
            1,
            "A",
            &[(10, "Hero Movie", "Hero", 9.0, "2010-05-01")],
        )))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/person/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(person_body(
            2,
            "B",
            &[(20, "Villain Movie", "Villain", 4.0, "2011-05-01")],
        )))
        .mount(&server)
        .await;
    mount_movie(&server, 10, 100).await;
    mount_movie(&server, 20, 200).await;
    mount_discover_page(&server, "movie", 1, 1, &[10, 11]).await;
    mount_discover_page(&server, "tv", 1, 1, &[1400]).await;

    let config = FranchiseConfig {
        name: "Marvel Studios".to_owned(),
        label: Some("Marvel".to_owned()),
        movie_companies: vec![420, 7505],
        tv_companies: vec![420, 7505],
    };

    let input = test_client(&server.uri())
        .fetch_comparison(1, 2, Some(&config))
        .await
        .expect("comparison fetch should succeed");

    assert_eq!(input.first.name, "A");
    assert_eq!(input.second.movie_credits[0].revenue, Some(200));
    let franchise = input.franchise.expect("franchise requested");
    assert_eq!(franchise.label, "Marvel");
    assert!(franchise.movie_ids.contains(&10));
    assert!(franchise.series_ids.contains(&1400));
}

#[tokio::test]
async fn fetch_comparison_fails_atomically() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/person/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(person_body(1, "A", &[])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/person/2"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let result = test_client(&server.uri()).fetch_comparison(1, 2, None).await;
    assert!(matches!(result, Err(TmdbError::NotFound { .. })));
}
