mod utils;

use utils::prelude::*;

#[tokio::test]
async fn create_defaults() {
    let app = App::new().await;

    let judge = app.create_judge("judge-1").await;

    assert_eq!(judge["status"], 0);
    assert_eq!(judge["ip"], "10.0.0.2");
    assert!(judge["last_run"].is_string());
}

#[tokio::test]
async fn invalid_ip() {
    let app = App::new().await;

    let res = app
        .post("/v1/judges")
        .json(&json!({ "name": "judge-1", "hostname": "judge.local", "ip": "300.1.1.1" }))
        .send()
        .await;

    assert_error!(res, error::JSON_VALIDATE_INVALID);
}

#[tokio::test]
async fn heartbeat() {
    let app = App::new().await;
    let judge = app.create_judge("judge-1").await;

    let res = app
        .post(&format!("/v1/judges/{}/status", id(&judge)))
        .json(&json!({ "status": 1 }))
        .send()
        .await;
    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = res.json().await;
    assert_eq!(body["status"], 1);

    let before = judge["last_run"].as_str().unwrap().parse::<chrono::DateTime<chrono::Utc>>().unwrap();
    let after = body["last_run"].as_str().unwrap().parse::<chrono::DateTime<chrono::Utc>>().unwrap();
    assert!(after >= before);

    let res = app
        .post("/v1/judges/99/status")
        .json(&json!({ "status": 1 }))
        .send()
        .await;
    assert_error!(res, error::JUDGE_NOT_FOUND);
}
