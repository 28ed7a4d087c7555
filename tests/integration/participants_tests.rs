use crate::common::*;
use mockito::{Matcher, Server};
use persephony_client::prelude::*;
use tokio_test::block_on;

#[tokio::test]
async fn list_returns_every_participant_of_the_page() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", PARTICIPANTS_PATH)
        .match_header("authorization", BASIC_AUTH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(participant_page(&["CA1", "CA2", "CA3"], 0, 1, None))
        .create_async()
        .await;

    let requester = participants_requester(&server.url());
    let list = requester.list().await.unwrap();

    assert_eq!(list.len(), 3);
    assert_eq!(list.items[2].call_id, "CA3");
    assert!(!list.has_next_page());
    mock.assert_async().await;
}

#[tokio::test]
async fn list_with_filters_sends_query_parameters() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", PARTICIPANTS_PATH)
        .match_header("authorization", BASIC_AUTH)
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("talk".into(), "true".into()),
            Matcher::UrlEncoded("listen".into(), "false".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(participant_page(&["CA1"], 0, 1, None))
        .create_async()
        .await;

    let requester = participants_requester(&server.url());
    let filters = ParticipantsSearchFilters::new()
        .with_talk(true)
        .with_listen(false);
    let list = requester.list_with_filters(&filters).await.unwrap();

    assert_eq!(list.len(), 1);
    mock.assert_async().await;
}

#[tokio::test]
async fn get_decodes_a_single_participant() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", format!("{PARTICIPANTS_PATH}/CA42").as_str())
        .match_header("authorization", BASIC_AUTH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(participant_json("CA42", false).to_string())
        .create_async()
        .await;

    let requester = participants_requester(&server.url());
    let participant = requester.get("CA42").await.unwrap();

    assert_eq!(participant.call_id, "CA42");
    assert_eq!(participant.talk, Some(false));
    assert_eq!(participant.account_id.as_deref(), Some(ACCOUNT_ID));
    mock.assert_async().await;
}

#[tokio::test]
async fn update_posts_encoded_options_verbatim() {
    let mut server = Server::new_async().await;
    let options = ParticipantUpdateOptions::new().with_talk(false);
    let expected_body = serde_json::to_string(&options).unwrap();

    let mock = server
        .mock("POST", format!("{PARTICIPANTS_PATH}/CA42").as_str())
        .match_header("authorization", BASIC_AUTH)
        .match_header("content-type", "application/json")
        .match_body(Matcher::Exact(expected_body))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(participant_json("CA42", false).to_string())
        .create_async()
        .await;

    let requester = participants_requester(&server.url());
    let updated = requester.update("CA42", &options).await.unwrap();

    assert_eq!(updated.talk, Some(false));
    mock.assert_async().await;
}

#[tokio::test]
async fn remove_issues_delete_and_returns_unit() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("DELETE", format!("{PARTICIPANTS_PATH}/CA42").as_str())
        .match_header("authorization", BASIC_AUTH)
        .with_status(204)
        .create_async()
        .await;

    let requester = participants_requester(&server.url());
    requester.remove("CA42").await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn remove_fails_on_server_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("DELETE", format!("{PARTICIPANTS_PATH}/CA42").as_str())
        .with_status(500)
        .with_header("content-type", "application/json")
        .with_body(r#"{"code": 1, "message": "Internal failure", "info": "n/a"}"#)
        .create_async()
        .await;

    let requester = participants_requester(&server.url());
    let err = requester.remove("CA42").await.unwrap_err();

    assert!(err.is_request_error());
    match err {
        AppError::Api { status, message } => {
            assert_eq!(status.as_u16(), 500);
            assert_eq!(message, "Internal failure");
        }
        other => panic!("Expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn get_maps_status_codes() {
    let mut server = Server::new_async().await;
    let _missing = server
        .mock("GET", format!("{PARTICIPANTS_PATH}/CAmissing").as_str())
        .with_status(404)
        .create_async()
        .await;
    let _denied = server
        .mock("GET", format!("{PARTICIPANTS_PATH}/CAdenied").as_str())
        .with_status(401)
        .create_async()
        .await;

    let requester = participants_requester(&server.url());
    assert!(matches!(
        requester.get("CAmissing").await.unwrap_err(),
        AppError::NotFound
    ));
    assert!(matches!(
        requester.get("CAdenied").await.unwrap_err(),
        AppError::Unauthorized
    ));
}

#[tokio::test]
async fn malformed_json_is_a_decode_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", PARTICIPANTS_PATH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("not json")
        .create_async()
        .await;

    let requester = participants_requester(&server.url());
    let err = requester.list().await.unwrap_err();

    assert!(err.is_decode_error());
    assert!(matches!(err, AppError::Json(_)));
}

#[tokio::test]
async fn set_base_url_redirects_requests() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", PARTICIPANTS_PATH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(participant_page(&[], 0, 0, None))
        .create_async()
        .await;

    let mut requester = participants_requester("http://127.0.0.1:1");
    requester.set_base_url(&format!("{}/", server.url()));
    let list = requester.list().await.unwrap();

    assert!(list.is_empty());
    mock.assert_async().await;
}

#[test]
fn list_works_from_a_blocking_context() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", PARTICIPANTS_PATH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(participant_page(&["CA1", "CA2"], 0, 1, None))
        .create();

    let requester = participants_requester(&server.url());
    let list = block_on(requester.list()).unwrap();

    assert_eq!(list.len(), 2);
    mock.assert();
}
