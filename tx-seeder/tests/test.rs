use std::time::Duration;

use mockito::Server;
use rand::thread_rng;
use tx_seeder::client::ApiClient;
use tx_seeder::seeder::Seeder;

#[test]
fn test_all_submissions_succeed() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/transactions")
        .match_header("content-type", "application/json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id": 1}"#)
        .expect(5)
        .create();

    let client = ApiClient::new(&server.url()).unwrap();
    let seeder = Seeder::new(client, 5, Duration::ZERO);
    let report = seeder.run(&mut thread_rng());

    mock.assert();
    assert_eq!(report.success_count, 5);
    assert_eq!(report.error_count, 0);
    assert_eq!(report.type_counts.total(), 5);
}

#[test]
fn test_all_submissions_fail() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/transactions")
        .with_status(500)
        .expect(3)
        .create();

    let client = ApiClient::new(&server.url()).unwrap();
    let seeder = Seeder::new(client, 3, Duration::ZERO);
    let report = seeder.run(&mut thread_rng());

    mock.assert();
    assert_eq!(report.success_count, 0);
    assert_eq!(report.error_count, 3);
    assert_eq!(report.type_counts.total(), 0);
}

#[test]
fn test_success_without_id_still_counts() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/transactions")
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body("{}")
        .expect(1)
        .create();

    let client = ApiClient::new(&server.url()).unwrap();
    let report = Seeder::new(client, 1, Duration::ZERO).run(&mut thread_rng());

    mock.assert();
    assert_eq!(report.success_count, 1);
    assert_eq!(report.error_count, 0);
}

#[test]
fn test_undecodable_success_body_counts_as_error() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/transactions")
        .with_status(200)
        .with_body("not json")
        .expect(1)
        .create();

    let client = ApiClient::new(&server.url()).unwrap();
    let report = Seeder::new(client, 1, Duration::ZERO).run(&mut thread_rng());

    mock.assert();
    assert_eq!(report.success_count, 0);
    assert_eq!(report.error_count, 1);
}

#[test]
fn test_unreachable_server_counts_errors() {
    // Nothing listens on this port; every submission fails at the transport.
    let client = ApiClient::new("http://127.0.0.1:9").unwrap();
    let report = Seeder::new(client, 2, Duration::ZERO).run(&mut thread_rng());

    assert_eq!(report.success_count, 0);
    assert_eq!(report.error_count, 2);
}
