use super::App;
use http::StatusCode;
use serde_json::{json, Value};

async fn created(app: &App, url: &str, body: Value) -> Value {
    let res = app.post(url).json(&body).send().await;

    assert_eq!(res.status(), StatusCode::CREATED, "POST {url}");

    res.json().await
}

pub fn id(value: &Value) -> i64 {
    value["id"].as_i64().expect("id is not a number")
}

#[allow(unused)]
impl App {
    pub async fn create_user(&self, username: &str) -> Value {
        created(self, "/v1/users", json!({ "username": username })).await
    }

    pub async fn create_problem(&self, title: &str) -> Value {
        created(
            self,
            "/v1/problems",
            json!({
                "title": title,
                "description": "Add two numbers.",
                "input_format": "Two integers.",
                "output_format": "Their sum.",
                "input_sample": "1 2",
                "output_sample": "3",
                "output_judge": "3",
                "time_limit": 1000,
                "memory_limit": 65536,
            }),
        )
        .await
    }

    pub async fn create_language(&self, name: &str, short_name: &str) -> Value {
        created(
            self,
            "/v1/languages",
            json!({
                "name": name,
                "short_name": short_name,
                "extensions": short_name,
            }),
        )
        .await
    }

    pub async fn create_team(&self, name: &str) -> Value {
        created(self, "/v1/teams", json!({ "name": name })).await
    }

    /// A contest that is running right now.
    pub async fn create_contest(&self, name: &str, contest_type: u8, need_approve: bool) -> Value {
        let now = chrono::Utc::now();

        created(
            self,
            "/v1/contests",
            json!({
                "name": name,
                "begin_time": now - chrono::Duration::hours(1),
                "end_time": now + chrono::Duration::hours(4),
                "type": contest_type,
                "open": 1,
                "need_approve": need_approve,
            }),
        )
        .await
    }

    pub async fn create_judge(&self, name: &str) -> Value {
        created(
            self,
            "/v1/judges",
            json!({
                "name": name,
                "hostname": "judge.local",
                "ip": "10.0.0.2",
            }),
        )
        .await
    }

    pub async fn create_comment(&self, problem: i64, parent: Option<i64>) -> Value {
        created(
            self,
            "/v1/comments",
            json!({
                "problem": problem,
                "parent": parent,
                "content": "Is the input sorted?",
            }),
        )
        .await
    }
}
