mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use common::{create_test_db, create_test_with_course, create_user, question};
use gain_knowledge::{db::Db, names, router, AppState};
use tower::ServiceExt;

fn create_app(db: &Db) -> Router {
    router(AppState {
        db: db.clone(),
        secure_cookies: false,
    })
}

async fn login(db: &Db, user_id: i64) -> String {
    let token = db
        .create_user_session(user_id)
        .await
        .expect("failed to create session");
    format!("user_session={token}")
}

async fn get(app: &Router, cookie: &str, uri: &str) -> axum::response::Response {
    let request = Request::builder()
        .uri(uri)
        .header(header::COOKIE, cookie)
        .body(Body::empty())
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

async fn post_form(app: &Router, cookie: &str, uri: &str, body: &str) -> axum::response::Response {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::COOKIE, cookie)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

fn location(response: &axum::response::Response) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .expect("missing Location header")
        .to_str()
        .unwrap()
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Walk a two-question test end to end: one correct answer, one
/// incorrect, then the score page showing 50% and resetting the tally.
#[tokio::test]
async fn test_full_quiz_walkthrough() {
    let db = create_test_db().await;
    let user_id = create_user(&db, "taker").await;
    let test_id = create_test_with_course(&db, user_id).await;
    db.create_question(test_id, question("Q1", "A")).await.unwrap();
    db.create_question(test_id, question("Q2", "B")).await.unwrap();

    let app = create_app(&db);
    let cookie = login(&db, user_id).await;

    // First question answered correctly moves to the second
    let response = post_form(&app, &cookie, &names::question_url(test_id, 0), "answer=A").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), names::question_url(test_id, 1));

    let counter = db.current_result(user_id).await.unwrap();
    assert_eq!(counter.correct_answers, 1);
    assert_eq!(counter.incorrect_answers, 0);

    // Last question answered incorrectly moves to the score page
    let response = post_form(&app, &cookie, &names::question_url(test_id, 1), "answer=C").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), names::final_score_url(test_id));

    let counter = db.current_result(user_id).await.unwrap();
    assert_eq!(counter.correct_answers, 1);
    assert_eq!(counter.incorrect_answers, 1);

    // The score page shows the floored percentage and resets the tally
    let response = get(&app, &cookie, &names::final_score_url(test_id)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("50"), "expected 50% in: {body}");

    let counter = db.current_result(user_id).await.unwrap();
    assert_eq!(counter.correct_answers, 0);
    assert_eq!(counter.incorrect_answers, 0);
}

#[tokio::test]
async fn test_rendering_a_question_does_not_touch_the_tally() {
    let db = create_test_db().await;
    let user_id = create_user(&db, "reader").await;
    let test_id = create_test_with_course(&db, user_id).await;
    db.create_question(test_id, question("Q1", "A")).await.unwrap();

    let app = create_app(&db);
    let cookie = login(&db, user_id).await;

    let response = get(&app, &cookie, &names::question_url(test_id, 0)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let response = get(&app, &cookie, &names::question_url(test_id, 0)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let counter = db.current_result(user_id).await.unwrap();
    assert_eq!(counter.correct_answers, 0);
    assert_eq!(counter.incorrect_answers, 0);
}

#[tokio::test]
async fn test_choices_render_in_label_order() {
    let db = create_test_db().await;
    let user_id = create_user(&db, "viewer").await;
    let test_id = create_test_with_course(&db, user_id).await;
    db.create_question(test_id, question("Which?", "C")).await.unwrap();

    let app = create_app(&db);
    let cookie = login(&db, user_id).await;

    let response = get(&app, &cookie, &names::question_url(test_id, 0)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;

    let positions: Vec<usize> = ["first", "second", "third", "fourth"]
        .iter()
        .map(|text| body.find(text).expect("option text missing"))
        .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));

    // Every label is a submittable radio value
    for label in ["A", "B", "C", "D"] {
        assert!(body.contains(&format!("value=\"{label}\"")));
    }
}

#[tokio::test]
async fn test_malformed_answer_counts_as_incorrect() {
    let db = create_test_db().await;
    let user_id = create_user(&db, "fumbler").await;
    let test_id = create_test_with_course(&db, user_id).await;
    db.create_question(test_id, question("Q1", "A")).await.unwrap();

    let app = create_app(&db);
    let cookie = login(&db, user_id).await;

    // A label that is not one of the choices
    let response = post_form(&app, &cookie, &names::question_url(test_id, 0), "answer=Z").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    // No answer field at all
    let response = post_form(&app, &cookie, &names::question_url(test_id, 0), "").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let counter = db.current_result(user_id).await.unwrap();
    assert_eq!(counter.correct_answers, 0);
    assert_eq!(counter.incorrect_answers, 2);
}

#[tokio::test]
async fn test_out_of_range_cursor_is_not_found() {
    let db = create_test_db().await;
    let user_id = create_user(&db, "wanderer").await;
    let test_id = create_test_with_course(&db, user_id).await;
    db.create_question(test_id, question("Q1", "A")).await.unwrap();

    let app = create_app(&db);
    let cookie = login(&db, user_id).await;

    let response = get(&app, &cookie, &names::question_url(test_id, 5)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = post_form(&app, &cookie, &names::question_url(test_id, 5), "answer=A").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // A rejected submission leaves the tally alone
    let counter = db.current_result(user_id).await.unwrap();
    assert_eq!(counter.correct_answers, 0);
    assert_eq!(counter.incorrect_answers, 0);
}

#[tokio::test]
async fn test_empty_test_shows_placeholder_without_scoring() {
    let db = create_test_db().await;
    let user_id = create_user(&db, "early").await;
    let test_id = create_test_with_course(&db, user_id).await;

    let app = create_app(&db);
    let cookie = login(&db, user_id).await;

    let response = get(&app, &cookie, &names::question_url(test_id, 0)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("no question available"), "unexpected body: {body}");

    let counter = db.current_result(user_id).await.unwrap();
    assert_eq!(counter.correct_answers, 0);
    assert_eq!(counter.incorrect_answers, 0);
}

#[tokio::test]
async fn test_missing_test_is_not_found() {
    let db = create_test_db().await;
    let user_id = create_user(&db, "lost").await;

    let app = create_app(&db);
    let cookie = login(&db, user_id).await;

    let response = get(&app, &cookie, &names::question_url(999, 0)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = get(&app, &cookie, &names::final_score_url(999)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_tally_carries_over_between_tests() {
    let db = create_test_db().await;
    let user_id = create_user(&db, "nomad").await;
    let first_test = create_test_with_course(&db, user_id).await;
    db.create_question(first_test, question("Q1", "A")).await.unwrap();
    let second_test = db
        .create_test("Waves", db.course_of_test(first_test).await.unwrap().unwrap().id)
        .await
        .unwrap();
    db.create_question(second_test, question("Q2", "B")).await.unwrap();

    let app = create_app(&db);
    let cookie = login(&db, user_id).await;

    // Answer one question in each test without visiting a score page;
    // the running tally is a single per-user counter.
    post_form(&app, &cookie, &names::question_url(first_test, 0), "answer=A").await;
    post_form(&app, &cookie, &names::question_url(second_test, 0), "answer=B").await;

    let counter = db.current_result(user_id).await.unwrap();
    assert_eq!(counter.correct_answers, 2);
    assert_eq!(counter.incorrect_answers, 0);
}

#[tokio::test]
async fn test_other_users_tally_is_untouched() {
    let db = create_test_db().await;
    let taker = create_user(&db, "active").await;
    let bystander = create_user(&db, "idle").await;
    let test_id = create_test_with_course(&db, taker).await;
    db.create_question(test_id, question("Q1", "A")).await.unwrap();

    db.record_answer(bystander, true).await.unwrap();

    let app = create_app(&db);
    let cookie = login(&db, taker).await;

    post_form(&app, &cookie, &names::question_url(test_id, 0), "answer=A").await;
    get(&app, &cookie, &names::final_score_url(test_id)).await;

    let untouched = db.current_result(bystander).await.unwrap();
    assert_eq!(untouched.correct_answers, 1);
    assert_eq!(untouched.incorrect_answers, 0);
}
