mod utils;

use utils::prelude::*;

#[tokio::test]
async fn create_defaults() {
    let app = App::new().await;
    let problem = app.create_problem("A + B").await;

    let comment = app.create_comment(id(&problem), None).await;

    assert_json_include!(
        actual: &comment,
        expected: json!({
            "author": app.admin_id,
            "problem": id(&problem),
            "parent": null,
            "agreement": 0,
            "disagreement": 0,
        })
    );
}

#[tokio::test]
async fn replies() {
    let app = App::new().await;
    let problem = app.create_problem("A + B").await;

    let comment = app.create_comment(id(&problem), None).await;
    let reply = app.create_comment(id(&problem), Some(id(&comment))).await;
    assert_eq!(reply["parent"], id(&comment));

    let res = app
        .get(&format!("/v1/comments/{}/replies", id(&comment)))
        .send()
        .await;
    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = res.json().await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["id"], id(&reply));
}

#[tokio::test]
async fn reply_on_another_problem() {
    let app = App::new().await;
    let first = app.create_problem("A + B").await;
    let second = app.create_problem("A - B").await;
    let comment = app.create_comment(id(&first), None).await;

    let res = app
        .post("/v1/comments")
        .json(&json!({
            "problem": id(&second),
            "parent": id(&comment),
            "content": "Wrong thread",
        }))
        .send()
        .await;

    assert_error!(res, error::PARENT_COMMENT_MISMATCH);
}

#[tokio::test]
async fn deleting_parent_keeps_replies() {
    let app = App::new().await;
    let problem = app.create_problem("A + B").await;
    let comment = app.create_comment(id(&problem), None).await;
    let reply = app.create_comment(id(&problem), Some(id(&comment))).await;

    let res = app
        .delete(&format!("/v1/comments/{}", id(&comment)))
        .send()
        .await;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let res = app
        .get(&format!("/v1/comments/{}", id(&reply)))
        .send()
        .await;
    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = res.json().await;
    assert_eq!(body["parent"], Value::Null);
}

#[tokio::test]
async fn replies_cannot_form_a_cycle() {
    let app = App::new().await;
    let problem = app.create_problem("A + B").await;
    let first = app.create_comment(id(&problem), None).await;
    let second = app.create_comment(id(&problem), Some(id(&first))).await;
    let third = app.create_comment(id(&problem), Some(id(&second))).await;
    let url = format!("/v1/comments/{}", id(&first));

    let res = app.patch(&url).json(&json!({ "parent": id(&third) })).send().await;
    assert_error!(res, error::COMMENT_CYCLE);

    let res = app.patch(&url).json(&json!({ "parent": id(&first) })).send().await;
    assert_error!(res, error::COMMENT_CYCLE);

    let res = app
        .patch(&format!("/v1/comments/{}", id(&third)))
        .json(&json!({ "parent": id(&first) }))
        .send()
        .await;
    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = res.json().await;
    assert_eq!(body["parent"], id(&first));
}

#[tokio::test]
async fn votes() {
    let app = App::new().await;
    let problem = app.create_problem("A + B").await;
    let comment = app.create_comment(id(&problem), None).await;

    for _ in 0..2 {
        let res = app
            .post(&format!("/v1/comments/{}/agree", id(&comment)))
            .send()
            .await;
        assert_eq!(res.status(), StatusCode::OK);
    }

    let res = app
        .post(&format!("/v1/comments/{}/disagree", id(&comment)))
        .send()
        .await;
    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = res.json().await;
    assert_eq!(body["agreement"], 2);
    assert_eq!(body["disagreement"], 1);

    let res = app.post("/v1/comments/99/agree").send().await;
    assert_error!(res, error::COMMENT_NOT_FOUND);
}

#[tokio::test]
async fn filter_by_problem() {
    let app = App::new().await;
    let first = app.create_problem("A + B").await;
    let second = app.create_problem("A - B").await;
    app.create_comment(id(&first), None).await;
    app.create_comment(id(&second), None).await;

    let res = app
        .get("/v1/comments")
        .query(&[("problem", id(&second))])
        .send()
        .await;
    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = res.json().await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["problem"], id(&second));
}

mod attachments {
    use super::*;

    async fn upload(app: &App, comment: &Value, filename: &str) -> Value {
        let res = app
            .post(&format!("/v1/comments/{}/attachments", id(comment)))
            .query(&[("filename", filename)])
            .body("data")
            .send()
            .await;
        assert_eq!(res.status(), StatusCode::CREATED);

        res.json().await
    }

    #[tokio::test]
    async fn long_filename() {
        let app = App::new().await;
        let problem = app.create_problem("A + B").await;
        let comment = app.create_comment(id(&problem), None).await;
        let filename = format!("{}.txt", "a".repeat(250));

        let attachment = upload(&app, &comment, &filename).await;

        assert_eq!(attachment["filename"], filename);
        let file = attachment["file"].as_str().unwrap();
        assert!(file.ends_with(".txt"));
        assert!(app.media_root().join(file).is_file());
    }

    #[tokio::test]
    async fn deleting_problem_removes_files() {
        let app = App::new().await;
        let problem = app.create_problem("A + B").await;
        let other = app.create_problem("A - B").await;
        let comment = app.create_comment(id(&problem), None).await;
        let kept = app.create_comment(id(&other), None).await;

        let attachment = upload(&app, &comment, "notes.txt").await;
        let removed = app.media_root().join(attachment["file"].as_str().unwrap());
        let attachment = upload(&app, &kept, "notes.txt").await;
        let untouched = app.media_root().join(attachment["file"].as_str().unwrap());

        let res = app
            .delete(&format!("/v1/problems/{}", id(&problem)))
            .send()
            .await;
        assert_eq!(res.status(), StatusCode::NO_CONTENT);

        assert!(!removed.exists());
        assert!(untouched.is_file());
    }

    #[tokio::test]
    async fn deleting_problem_set_removes_files() {
        let app = App::new().await;
        let res = app
            .post("/v1/problem_sets")
            .json(&json!({ "name": "Warmup" }))
            .send()
            .await;
        let problem_set: Value = res.json().await;

        let problem = app.create_problem("A + B").await;
        let res = app
            .patch(&format!("/v1/problems/{}", id(&problem)))
            .json(&json!({ "problem_set": id(&problem_set) }))
            .send()
            .await;
        assert_eq!(res.status(), StatusCode::OK);

        let comment = app.create_comment(id(&problem), None).await;
        let attachment = upload(&app, &comment, "notes.txt").await;
        let path = app.media_root().join(attachment["file"].as_str().unwrap());

        let res = app
            .delete(&format!("/v1/problem_sets/{}", id(&problem_set)))
            .send()
            .await;
        assert_eq!(res.status(), StatusCode::NO_CONTENT);

        assert!(!path.exists());
        let res = app.get(&format!("/v1/comments/{}", id(&comment))).send().await;
        assert_error!(res, error::COMMENT_NOT_FOUND);
    }

    #[tokio::test]
    async fn deleting_author_removes_files() {
        let app = App::new().await;
        let alice = app.create_user("alice").await;
        let problem = app.create_problem("A + B").await;

        let res = app
            .post("/v1/comments")
            .json(&json!({
                "author": id(&alice),
                "problem": id(&problem),
                "content": "See the attached proof.",
            }))
            .send()
            .await;
        let comment: Value = res.json().await;
        let attachment = upload(&app, &comment, "proof.pdf").await;
        let path = app.media_root().join(attachment["file"].as_str().unwrap());

        let res = app.delete(&format!("/v1/users/{}", id(&alice))).send().await;
        assert_eq!(res.status(), StatusCode::NO_CONTENT);

        assert!(!path.exists());
    }

    #[tokio::test]
    async fn upload_and_download() {
        let app = App::new().await;
        let problem = app.create_problem("A + B").await;
        let comment = app.create_comment(id(&problem), None).await;

        let res = app
            .post(&format!("/v1/comments/{}/attachments", id(&comment)))
            .query(&[("filename", "../sol.cpp")])
            .body("int main() {}")
            .send()
            .await;
        assert_eq!(res.status(), StatusCode::CREATED);

        let attachment: Value = res.json().await;
        assert_eq!(attachment["filename"], "../sol.cpp");
        assert_eq!(attachment["size"], 13);

        let file = attachment["file"].as_str().unwrap();
        assert!(file.starts_with("attachments/"));
        assert!(file.ends_with("-sol.cpp"));
        assert!(app.media_root().join(file).is_file());

        let res = app
            .get(&format!("/v1/comment_attachments/{}/file", id(&attachment)))
            .send()
            .await;
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(&res.bytes().await[..], b"int main() {}");

        let res = app
            .get(&format!("/v1/comments/{}/attachments", id(&comment)))
            .send()
            .await;
        let body: Value = res.json().await;
        assert_eq!(body.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn delete_removes_file() {
        let app = App::new().await;
        let problem = app.create_problem("A + B").await;
        let comment = app.create_comment(id(&problem), None).await;

        let res = app
            .post(&format!("/v1/comments/{}/attachments", id(&comment)))
            .query(&[("filename", "notes.txt")])
            .body("notes")
            .send()
            .await;
        let attachment: Value = res.json().await;
        let path = app.media_root().join(attachment["file"].as_str().unwrap());

        let res = app
            .delete(&format!("/v1/comment_attachments/{}", id(&attachment)))
            .send()
            .await;
        assert_eq!(res.status(), StatusCode::NO_CONTENT);
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn missing_filename() {
        let app = App::new().await;
        let problem = app.create_problem("A + B").await;
        let comment = app.create_comment(id(&problem), None).await;

        let res = app
            .post(&format!("/v1/comments/{}/attachments", id(&comment)))
            .body("data")
            .send()
            .await;

        assert_error!(res, error::MISSING_FILENAME);
    }

    #[tokio::test]
    async fn unknown_comment() {
        let app = App::new().await;

        let res = app
            .post("/v1/comments/5/attachments")
            .query(&[("filename", "a.txt")])
            .body("data")
            .send()
            .await;

        assert_error!(res, error::COMMENT_NOT_FOUND);
    }
}
