mod utils;

use utils::prelude::*;

async fn create_profile(app: &App, user: &Value) -> Value {
    let res = app
        .post("/v1/user_profiles")
        .json(&json!({
            "user": id(user),
            "realname": "Alice Liddell",
            "gender": "F",
            "bio": "Likes graphs.",
        }))
        .send()
        .await;
    assert_eq!(res.status(), StatusCode::CREATED);

    res.json().await
}

#[tokio::test]
async fn one_profile_per_user() {
    let app = App::new().await;
    let alice = app.create_user("alice").await;
    let profile = create_profile(&app, &alice).await;

    assert_json_include!(
        actual: &profile,
        expected: json!({
            "gender": "F",
            "photo": null,
            "thumb_24": null,
            "thumb_48": null,
            "thumb_96": null,
        })
    );

    let res = app
        .post("/v1/user_profiles")
        .json(&json!({ "user": id(&alice), "realname": "", "gender": "F" }))
        .send()
        .await;
    assert_error!(res, error::DUPLICATE_PROFILE);

    let res = app
        .get(&format!("/v1/user_profiles/user/{}", id(&alice)))
        .send()
        .await;
    let body: Value = res.json().await;
    assert_eq!(body["id"], id(&profile));
}

#[tokio::test]
async fn invalid_gender() {
    let app = App::new().await;
    let alice = app.create_user("alice").await;

    let res = app
        .post("/v1/user_profiles")
        .json(&json!({ "user": id(&alice), "realname": "", "gender": "X" }))
        .send()
        .await;

    assert_error!(res, error::JSON_MISSING_FIELDS);
}

#[tokio::test]
async fn starred_problems() {
    let app = App::new().await;
    let alice = app.create_user("alice").await;
    let profile = create_profile(&app, &alice).await;
    let problem = app.create_problem("A + B").await;
    let url = format!("/v1/user_profiles/{}/starred/{}", id(&profile), id(&problem));

    for _ in 0..2 {
        let res = app.put(&url).send().await;
        assert_eq!(res.status(), StatusCode::NO_CONTENT);
    }

    let res = app
        .get(&format!("/v1/user_profiles/{}/starred", id(&profile)))
        .send()
        .await;
    let body: Value = res.json().await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["title"], "A + B");

    let res = app.delete(&url).send().await;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let res = app
        .get(&format!("/v1/user_profiles/{}/starred", id(&profile)))
        .send()
        .await;
    let body: Value = res.json().await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn photo_upload_replaces_old_photo() {
    let app = App::new().await;
    let alice = app.create_user("alice").await;
    let profile = create_profile(&app, &alice).await;
    let url = format!("/v1/user_profiles/{}/photo", id(&profile));

    let res = app
        .put(&url)
        .query(&[("filename", "me.png")])
        .body("first")
        .send()
        .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await;
    let first = app.media_root().join(body["photo"].as_str().unwrap());
    assert!(body["photo"].as_str().unwrap().starts_with("profile/photo/"));
    assert!(first.is_file());

    let res = app
        .put(&url)
        .query(&[("filename", "me2.png")])
        .body("second")
        .send()
        .await;
    let body: Value = res.json().await;
    let second = app.media_root().join(body["photo"].as_str().unwrap());
    assert!(!first.exists());
    assert!(second.is_file());

    let res = app.delete(&url).send().await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await;
    assert_eq!(body["photo"], Value::Null);
    assert!(!second.exists());
}

#[tokio::test]
async fn deleting_user_removes_photo() {
    let app = App::new().await;
    let alice = app.create_user("alice").await;
    let profile = create_profile(&app, &alice).await;

    let res = app
        .put(&format!("/v1/user_profiles/{}/photo", id(&profile)))
        .query(&[("filename", "me.png")])
        .body("png")
        .send()
        .await;
    let body: Value = res.json().await;
    let photo = app.media_root().join(body["photo"].as_str().unwrap());
    assert!(photo.is_file());

    let res = app.delete(&format!("/v1/users/{}", id(&alice))).send().await;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    assert!(!photo.exists());
    let res = app
        .get(&format!("/v1/user_profiles/{}", id(&profile)))
        .send()
        .await;
    assert_error!(res, error::PROFILE_NOT_FOUND);
}
