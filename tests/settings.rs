mod utils;

use utils::prelude::*;

async fn set(app: &App, key: &str, value: &str) -> Value {
    let res = app
        .post("/v1/settings")
        .json(&json!({ "key": key, "value": value }))
        .send()
        .await;
    assert_eq!(res.status(), StatusCode::CREATED);

    res.json().await
}

#[tokio::test]
async fn lookup_by_key() {
    let app = App::new().await;
    set(&app, "site_name", "Online Judge").await;
    set(&app, "site_name", "Shadowed").await;

    let res = app.get("/v1/settings/key/site_name").send().await;
    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = res.json().await;
    assert_eq!(body["value"], "Online Judge");

    let res = app.get("/v1/settings/key/missing").send().await;
    assert_error!(res, error::SETTING_NOT_FOUND);
}

#[tokio::test]
async fn update_and_delete() {
    let app = App::new().await;
    let setting = set(&app, "register_open", "false").await;
    let url = format!("/v1/settings/{}", id(&setting));

    let res = app.patch(&url).json(&json!({ "value": "true" })).send().await;
    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = res.json().await;
    assert_eq!(body["key"], "register_open");
    assert_eq!(body["value"], "true");

    let res = app.delete(&url).send().await;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let res = app.delete(&url).send().await;
    assert_error!(res, error::SETTING_NOT_FOUND);
}
