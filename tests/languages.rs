mod utils;

use utils::prelude::*;

#[tokio::test]
async fn multipliers_default_to_one() {
    let app = App::new().await;

    let language = app.create_language("GNU C++ 17", "cpp").await;

    assert_eq!(language["time_mul"], 1.0);
    assert_eq!(language["memory_mul"], 1.0);
    assert_eq!(language["extensions"], "cpp");
}

#[tokio::test]
async fn duplicate_names() {
    let app = App::new().await;
    app.create_language("GNU C++ 17", "cpp").await;

    let res = app
        .post("/v1/languages")
        .json(&json!({ "name": "GNU C++ 17", "short_name": "cpp17", "extensions": "cpp" }))
        .send()
        .await;
    assert_error!(res, error::DUPLICATE_LANGUAGE_NAME);

    let res = app
        .post("/v1/languages")
        .json(&json!({ "name": "Clang C++", "short_name": "cpp", "extensions": "cpp" }))
        .send()
        .await;
    assert_error!(res, error::DUPLICATE_LANGUAGE_SHORT_NAME);
}

#[tokio::test]
async fn multiplier_must_be_positive() {
    let app = App::new().await;

    let res = app
        .post("/v1/languages")
        .json(&json!({
            "name": "Python 3",
            "short_name": "py3",
            "time_mul": 0.0,
            "extensions": "py",
        }))
        .send()
        .await;

    assert_error!(res, error::JSON_VALIDATE_INVALID);
}

#[tokio::test]
async fn update_multiplier() {
    let app = App::new().await;
    let language = app.create_language("Python 3", "py3").await;

    let res = app
        .patch(&format!("/v1/languages/{}", id(&language)))
        .json(&json!({ "time_mul": 3.5 }))
        .send()
        .await;
    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = res.json().await;
    assert_eq!(body["time_mul"], 3.5);
    assert_eq!(body["memory_mul"], 1.0);
}
