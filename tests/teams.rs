mod utils;

use utils::prelude::*;

#[tokio::test]
async fn create_with_members() {
    let app = App::new().await;
    let alice = app.create_user("alice").await;
    let bob = app.create_user("bob").await;

    let res = app
        .post("/v1/teams")
        .json(&json!({
            "name": "Segfaults",
            "intro": "We never pass the samples.",
            "members": [id(&alice), id(&bob)],
        }))
        .send()
        .await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let team: Value = res.json().await;

    let res = app
        .get(&format!("/v1/teams/{}/members", id(&team)))
        .send()
        .await;
    let body: Value = res.json().await;
    let members: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|user| user["username"].as_str().unwrap())
        .collect();
    assert_eq!(members, ["alice", "bob"]);

    let res = app
        .get(&format!("/v1/users/{}/teams", id(&bob)))
        .send()
        .await;
    let body: Value = res.json().await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["name"], "Segfaults");
}

#[tokio::test]
async fn create_with_unknown_member_is_rolled_back() {
    let app = App::new().await;

    let res = app
        .post("/v1/teams")
        .json(&json!({ "name": "Ghosts", "members": [404] }))
        .send()
        .await;
    assert_error!(res, error::USER_NOT_FOUND);

    let res = app.get("/v1/teams").send().await;
    let body: Value = res.json().await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn duplicate_name() {
    let app = App::new().await;
    app.create_team("Segfaults").await;

    let res = app
        .post("/v1/teams")
        .json(&json!({ "name": "Segfaults" }))
        .send()
        .await;

    assert_error!(res, error::DUPLICATE_TEAM_NAME);
}

#[tokio::test]
async fn add_and_remove_member() {
    let app = App::new().await;
    let team = app.create_team("Segfaults").await;
    let alice = app.create_user("alice").await;
    let url = format!("/v1/teams/{}/members/{}", id(&team), id(&alice));

    let res = app.put(&url).send().await;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let res = app.put(&url).send().await;
    assert_error!(res, error::ALREADY_IN_TEAM);

    let res = app.delete(&url).send().await;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let res = app.delete(&url).send().await;
    assert_error!(res, error::NO_SUCH_MEMBER);
}

#[tokio::test]
async fn add_unknown_user() {
    let app = App::new().await;
    let team = app.create_team("Segfaults").await;

    let res = app
        .put(&format!("/v1/teams/{}/members/404", id(&team)))
        .send()
        .await;

    assert_error!(res, error::USER_NOT_FOUND);
}

#[tokio::test]
async fn clear_intro() {
    let app = App::new().await;

    let res = app
        .post("/v1/teams")
        .json(&json!({ "name": "Segfaults", "intro": "hello" }))
        .send()
        .await;
    let team: Value = res.json().await;

    let res = app
        .patch(&format!("/v1/teams/{}", id(&team)))
        .json(&json!({ "intro": null }))
        .send()
        .await;
    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = res.json().await;
    assert_eq!(body["intro"], Value::Null);
    assert_eq!(body["name"], "Segfaults");
}
