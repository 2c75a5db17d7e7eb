use secrecy::Secret;
use shift_finder::domain::ShiftRepository;
use shift_finder::services::static_shift_repository::sample_shifts;
use shift_finder::services::HttpShiftRepository;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn repository(server: &MockServer, api_key: Option<&str>) -> HttpShiftRepository {
    HttpShiftRepository::new(
        reqwest::Client::new(),
        format!("{}/shifts", server.uri()),
        api_key.map(|key| Secret::new(key.to_string())),
    )
}

#[tokio::test]
async fn posts_coordinates_and_deserializes_the_envelope() {
    let server = MockServer::start().await;
    let envelope = serde_json::json!({
        "data": sample_shifts(),
        "status": 200,
    });

    Mock::given(method("POST"))
        .and(path("/shifts"))
        .and(body_json(serde_json::json!({
            "latitude": 45.103,
            "longitude": 38.916,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope))
        .expect(1)
        .mount(&server)
        .await;

    let page = repository(&server, None)
        .get_shifts_by_location(45.103, 38.916)
        .await
        .expect("Fetch should succeed");

    assert_eq!(page.status, 200);
    assert_eq!(page.data.len(), 2);
    assert_eq!(page.data[1].company_name, "ДОГМА");
}

#[tokio::test]
async fn sends_the_configured_api_key_as_bearer_auth() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/shifts"))
        .and(header("Authorization", "Bearer sekret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            serde_json::json!({ "data": [], "status": 200 }),
        ))
        .expect(1)
        .mount(&server)
        .await;

    let page = repository(&server, Some("sekret"))
        .get_shifts_by_location(45.103, 38.916)
        .await
        .expect("Fetch should succeed");
    assert!(page.data.is_empty());
}

#[tokio::test]
async fn non_2xx_status_is_a_network_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/shifts"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let result = repository(&server, None)
        .get_shifts_by_location(45.103, 38.916)
        .await;
    let error = result.expect_err("A 500 must fail the fetch");
    assert_eq!(error.to_string(), "Network error");
}

#[tokio::test]
async fn malformed_body_is_a_network_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/shifts"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string("not json at all"),
        )
        .mount(&server)
        .await;

    let result = repository(&server, None)
        .get_shifts_by_location(45.103, 38.916)
        .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn transport_failure_is_a_network_error() {
    // Nothing is listening on this port once the server is dropped.
    let server = MockServer::start().await;
    let url = format!("{}/shifts", server.uri());
    drop(server);

    let repository =
        HttpShiftRepository::new(reqwest::Client::new(), url, None);
    let result = repository.get_shifts_by_location(45.103, 38.916).await;
    assert!(result.is_err());
}
