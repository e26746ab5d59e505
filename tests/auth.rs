mod utils;

use utils::prelude::*;

#[tokio::test]
async fn health_checks_do_not_need_credentials() {
    let app = App::new().await;

    let res = app.anonymous(Method::GET, "/livez").send().await;
    assert_eq!(res.status(), StatusCode::OK);

    let res = app.anonymous(Method::GET, "/readyz").send().await;
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn missing_token() {
    let app = App::new().await;

    let res = app.anonymous(Method::GET, "/v1/problems").send().await;

    assert_error!(res, error::COULD_NOT_GET_CLAIMS);
}

#[tokio::test]
async fn invalid_token() {
    let app = App::new().await;

    let res = app
        .anonymous(Method::GET, "/v1/problems")
        .token("not.a.token")
        .send()
        .await;

    assert_error!(res, error::COULD_NOT_GET_CLAIMS);
}

#[tokio::test]
async fn non_staff_user() {
    let app = App::new().await;
    let user = app.create_user("contestant").await;
    let token = app.token_for(id(&user) as i32, false);

    let res = app
        .anonymous(Method::GET, "/v1/problems")
        .token(&token)
        .send()
        .await;

    assert_error!(res, error::NOT_ENOUGH_PERMISSIONS);
}

#[tokio::test]
async fn registry_lists_every_model() {
    let app = App::new().await;

    let res = app.get("/v1/admin").send().await;
    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = res.json().await;
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|model| model["name"].as_str().unwrap())
        .collect();

    for name in [
        "ProblemSet",
        "Problem",
        "ProblemAttribute",
        "Comment",
        "CommentAttachment",
        "Team",
        "Language",
        "Contest",
        "ContestUser",
        "ContestTeam",
        "Judge",
        "Submission",
        "Settings",
        "UserProfile",
    ] {
        assert!(names.contains(&name), "{name} is not registered");
    }
}

#[tokio::test]
async fn unknown_path_parameter() {
    let app = App::new().await;

    let res = app.get("/v1/problems/abc").send().await;

    assert_error!(res, error::INVALID_PATH);
}
