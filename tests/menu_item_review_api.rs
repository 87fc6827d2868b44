mod common;

use axum::http::StatusCode;
use campus_api::entities::MenuItemReview;
use chrono::NaiveDate;
use common::{ADMIN_TOKEN, TestApp, USER_TOKEN};
use serde_json::json;

const REVIEW_POST: &str = "/api/menuitemreview/post?itemId=3&reviewerEmail=admin%40example.com\
    &stars=5&dateReviewed=2022-04-20T17%3A35%3A00&comments=Excellent%21";

fn review(item_id: i64, email: &str, stars: i32, comments: &str) -> MenuItemReview {
    MenuItemReview {
        id: 0,
        item_id,
        reviewer_email: email.to_string(),
        stars,
        date_reviewed: NaiveDate::from_ymd_opt(2022, 4, 20)
            .unwrap()
            .and_hms_opt(17, 35, 0)
            .unwrap(),
        comments: comments.to_string(),
    }
}

async fn seed(app: &TestApp, record: MenuItemReview) -> MenuItemReview {
    app.state.menu_item_reviews.save(record).await.unwrap()
}

#[tokio::test]
async fn logged_out_users_cannot_get_all() {
    let app = TestApp::new();
    let (status, _) = app.get("/api/menuitemreview/all", None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn logged_in_user_can_get_all_reviews() {
    let app = TestApp::new();
    let first = seed(&app, review(1, "user1@example.com", 5, "Great!")).await;
    let second = seed(&app, review(2, "user2@example.com", 4, "Good!")).await;

    let (status, body) = app.get("/api/menuitemreview/all", Some(USER_TOKEN)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([first, second]));
}

#[tokio::test]
async fn only_admins_can_post() {
    let app = TestApp::new();

    let (status, _) = app.post("/api/menuitemreview/post", None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = app.post("/api/menuitemreview/post", Some(USER_TOKEN)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn admin_can_post_a_new_review() {
    let app = TestApp::new();

    let (status, body) = app.post(REVIEW_POST, Some(ADMIN_TOKEN)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "id": 1,
            "itemId": 3,
            "reviewerEmail": "admin@example.com",
            "stars": 5,
            "dateReviewed": "2022-04-20T17:35:00",
            "comments": "Excellent!"
        })
    );
}

#[tokio::test]
async fn created_reviews_get_distinct_ids() {
    let app = TestApp::new();

    let (_, first) = app.post(REVIEW_POST, Some(ADMIN_TOKEN)).await;
    let (_, second) = app.post(REVIEW_POST, Some(ADMIN_TOKEN)).await;

    assert_ne!(first["id"], second["id"]);
    assert_eq!(app.state.menu_item_reviews.list_all().await.unwrap().len(), 2);
}

#[tokio::test]
async fn post_accepts_minute_precision_dates() {
    let app = TestApp::new();

    let (status, body) = app
        .post(
            "/api/menuitemreview/post?itemId=1&reviewerEmail=a%40b.edu&stars=2\
             &dateReviewed=2022-01-03T00%3A00&comments=meh",
            Some(ADMIN_TOKEN),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["dateReviewed"], "2022-01-03T00:00:00");
}

#[tokio::test]
async fn post_with_bad_date_is_rejected() {
    let app = TestApp::new();

    let (status, _) = app
        .post(
            "/api/menuitemreview/post?itemId=1&reviewerEmail=a%40b.edu&stars=2\
             &dateReviewed=tomorrow&comments=meh",
            Some(ADMIN_TOKEN),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn user_can_get_review_by_id() {
    let app = TestApp::new();
    let saved = seed(&app, review(7, "cgaucho@ucsb.edu", 3, "Fine")).await;

    let (status, body) = app
        .get(&format!("/api/menuitemreview?id={}", saved.id), Some(USER_TOKEN))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!(saved));
}

#[tokio::test]
async fn get_missing_review_returns_not_found() {
    let app = TestApp::new();

    let (status, body) = app.get("/api/menuitemreview?id=7", Some(USER_TOKEN)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["type"], "EntityNotFoundException");
    assert_eq!(body["message"], "MenuItemReview with id 7 not found");
}

#[tokio::test]
async fn admin_can_update_review() {
    let app = TestApp::new();
    let saved = seed(&app, review(7, "cgaucho@ucsb.edu", 1, "Cold")).await;

    let edited = json!({
        "id": saved.id,
        "itemId": 8,
        "reviewerEmail": "ldelplaya@ucsb.edu",
        "stars": 4,
        "dateReviewed": "2022-05-01T12:00:00",
        "comments": "Better the second time"
    });

    let (status, body) = app
        .put(
            &format!("/api/menuitemreview?id={}", saved.id),
            Some(ADMIN_TOKEN),
            edited.clone(),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, edited);

    let stored = app
        .state
        .menu_item_reviews
        .find_by_key(&saved.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.stars, 4);
    assert_eq!(stored.item_id, 8);
}

#[tokio::test]
async fn update_keeps_the_key_from_the_query() {
    let app = TestApp::new();
    let saved = seed(&app, review(7, "cgaucho@ucsb.edu", 1, "Cold")).await;

    let (status, body) = app
        .put(
            &format!("/api/menuitemreview?id={}", saved.id),
            Some(ADMIN_TOKEN),
            json!({
                "id": 999,
                "itemId": 7,
                "reviewerEmail": "cgaucho@ucsb.edu",
                "stars": 2,
                "dateReviewed": "2022-04-20T17:35:00",
                "comments": "Lukewarm"
            }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], saved.id);
    assert_eq!(app.state.menu_item_reviews.list_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn update_missing_review_returns_not_found() {
    let app = TestApp::new();

    let (status, body) = app
        .put(
            "/api/menuitemreview?id=67",
            Some(ADMIN_TOKEN),
            json!({
                "itemId": 7,
                "reviewerEmail": "cgaucho@ucsb.edu",
                "stars": 2,
                "dateReviewed": "2022-04-20T17:35:00",
                "comments": "Lukewarm"
            }),
        )
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "MenuItemReview with id 67 not found");
}

#[tokio::test]
async fn admin_can_delete_review() {
    let app = TestApp::new();
    let saved = seed(&app, review(7, "cgaucho@ucsb.edu", 1, "Cold")).await;
    let uri = format!("/api/menuitemreview?id={}", saved.id);

    let (status, _) = app.delete(&uri, Some(USER_TOKEN)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = app.delete(&uri, Some(ADMIN_TOKEN)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["message"],
        format!("MenuItemReview with id {} deleted", saved.id)
    );

    let (status, _) = app.get(&uri, Some(USER_TOKEN)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_missing_review_returns_not_found() {
    let app = TestApp::new();

    let (status, body) = app.delete("/api/menuitemreview?id=15", Some(ADMIN_TOKEN)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "MenuItemReview with id 15 not found");
}
