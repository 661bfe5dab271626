//! Integration tests for the poll list flow
//!
//! A successful vote triggers exactly one full-list refetch, and the counts
//! shown afterwards are the backend's, never a local increment.

mod common;

use axum::http::Method;
use common::FakeBackend;
use polltui::api::Id;
use polltui::logic::route::Route;
use polltui::model::ListReason;
use polltui::services::ApiResponse;

fn lunch_backend_polls() -> Vec<serde_json::Value> {
    vec![
        common::poll_json(1, "Lunch", &[(10, "Tacos", 4), (11, "Ramen", 1)]),
        common::poll_json(2, "Legacy", &[]),
    ]
}

#[tokio::test]
async fn test_initial_load_fills_list() {
    let backend = FakeBackend::with_polls(lunch_backend_polls()).await;
    let dir = tempfile::tempdir().unwrap();
    let mut app = common::app(&backend, common::session(&dir, true));

    app.start();
    assert_eq!(app.model.route, Route::PollList);
    assert!(app.model.poll_list.loading);

    common::pump(&mut app).await;
    let list = &app.model.poll_list;
    assert!(!list.loading);
    assert_eq!(list.polls.len(), 2);
    assert!(list.polls[1].is_legacy());
    assert_eq!(list.vote_target(), Some((Id::Int(1), Id::Int(10))));
}

#[tokio::test]
async fn test_vote_refetches_exactly_once_and_shows_server_counts() {
    let backend = FakeBackend::with_polls(lunch_backend_polls()).await;
    let dir = tempfile::tempdir().unwrap();
    let mut app = common::app(&backend, common::session(&dir, true));
    app.start();
    common::pump(&mut app).await;
    assert_eq!(backend.count(Method::GET, "/api/polls"), 1);

    // Another client votes in between; our refetch must pick that up too
    app.model.poll_list.select_next_option();
    app.vote_selected();
    assert_eq!(app.model.poll_list.votes_in_flight, 1);
    // Nothing changes locally while the vote is in flight
    assert_eq!(app.model.poll_list.polls[0].options[1].vote_count, Some(1));

    // Vote response: handler issues the refetch
    let response = common::next(&mut app).await;
    assert!(matches!(
        response,
        ApiResponse::VoteRecorded { ref option_id, result: Ok(_), .. } if *option_id == Id::Int(11)
    ));
    backend.state.lock().unwrap().polls[0]["options"][0]["vote_count"] = serde_json::json!(9);
    app.handle_api_response(response);
    assert_eq!(app.model.poll_list.votes_in_flight, 0);
    assert_eq!(app.model.poll_list.polls[0].options[1].vote_count, Some(1));

    // Refetch response
    let response = common::next(&mut app).await;
    assert!(matches!(
        response,
        ApiResponse::PollsLoaded {
            reason: ListReason::AfterVote,
            result: Ok(_)
        }
    ));
    app.handle_api_response(response);

    let options = &app.model.poll_list.polls[0].options;
    assert_eq!(options[0].vote_count, Some(9));
    assert_eq!(options[1].vote_count, Some(2));

    // Exactly one refetch, and nothing else pending
    assert!(common::quiet(&mut app).await);
    assert_eq!(backend.count(Method::GET, "/api/polls"), 2);
    assert_eq!(backend.count(Method::POST, "/api/polls/1/vote"), 1);
}

#[tokio::test]
async fn test_failed_vote_shows_error_and_does_not_refetch() {
    let backend = FakeBackend::with_polls(lunch_backend_polls()).await;
    let dir = tempfile::tempdir().unwrap();
    let mut app = common::app(&backend, common::session(&dir, true));
    app.start();
    common::pump(&mut app).await;

    app.cast_vote(Id::Int(1), Id::Int(999));
    common::pump(&mut app).await;

    let toast = app.model.ui.toast_message.as_ref().map(|(m, _)| m.clone());
    assert_eq!(toast.as_deref(), Some("Error: Invalid option for this poll"));
    assert!(common::quiet(&mut app).await);
    assert_eq!(backend.count(Method::GET, "/api/polls"), 1);
    assert_eq!(app.model.poll_list.polls[0].options[0].vote_count, Some(4));
}

#[tokio::test]
async fn test_legacy_poll_cannot_be_voted_on() {
    let backend = FakeBackend::with_polls(lunch_backend_polls()).await;
    let dir = tempfile::tempdir().unwrap();
    let mut app = common::app(&backend, common::session(&dir, true));
    app.start();
    common::pump(&mut app).await;

    app.model.poll_list.select_next_poll();
    assert_eq!(app.model.poll_list.selected_poll().map(|p| p.title.as_str()), Some("Legacy"));
    app.vote_selected();
    app.vote_option_at(0);

    assert_eq!(app.model.poll_list.votes_in_flight, 0);
    assert!(common::quiet(&mut app).await);
    assert_eq!(backend.count(Method::POST, "/api/polls/2/vote"), 0);
}

#[tokio::test]
async fn test_delete_and_edit_refetch_list() {
    let backend = FakeBackend::with_polls(lunch_backend_polls()).await;
    let dir = tempfile::tempdir().unwrap();
    let mut app = common::app(&backend, common::session(&dir, true));
    app.start();
    common::pump(&mut app).await;

    // Edit: dialog loads a fresh copy, then saves and refetches
    app.open_edit_selected();
    common::pump(&mut app).await;
    let edit = app.model.poll_list.edit.as_mut().unwrap();
    assert!(!edit.loading);
    edit.title = "Dinner".to_string();
    app.save_edit();
    common::pump(&mut app).await; // PollUpdated
    assert!(app.model.poll_list.edit.is_none());
    common::pump(&mut app).await; // PollsLoaded AfterEdit
    assert_eq!(app.model.poll_list.polls[0].title, "Dinner");

    // Delete behind confirmation
    app.model.poll_list.select_next_poll();
    app.request_delete_selected();
    assert!(app.model.poll_list.confirm_delete.is_some());
    app.confirm_delete();
    common::pump(&mut app).await; // PollDeleted
    common::pump(&mut app).await; // PollsLoaded AfterDelete
    assert_eq!(app.model.poll_list.polls.len(), 1);
    assert_eq!(backend.count(Method::DELETE, "/api/polls/2"), 1);
}

#[tokio::test]
async fn test_edit_requires_title() {
    let backend = FakeBackend::with_polls(lunch_backend_polls()).await;
    let dir = tempfile::tempdir().unwrap();
    let mut app = common::app(&backend, common::session(&dir, true));
    app.start();
    common::pump(&mut app).await;

    app.open_edit_selected();
    common::pump(&mut app).await;
    app.model.poll_list.edit.as_mut().unwrap().title = "   ".to_string();
    app.save_edit();

    let edit = app.model.poll_list.edit.as_ref().unwrap();
    assert_eq!(edit.error.as_deref(), Some("Title is required"));
    assert!(!edit.saving);
    assert!(common::quiet(&mut app).await);
    assert_eq!(backend.count(Method::PUT, "/api/polls/1"), 0);
}
