mod utils;

use utils::prelude::*;

mod create {
    use super::*;

    #[tokio::test]
    async fn success() {
        let app = App::new().await;

        let problem = app.create_problem("A + B").await;

        assert_json_include!(
            actual: &problem,
            expected: json!({
                "title": "A + B",
                "hint": null,
                "custom_judge_type": 0,
                "author": app.admin_id,
                "problem_set": null,
                "approved": false,
            })
        );
        assert!(problem["created_time"].is_string());
    }

    #[tokio::test]
    async fn duplicate_title() {
        let app = App::new().await;
        app.create_problem("A + B").await;

        let res = app
            .post("/v1/problems")
            .json(&json!({
                "title": "A + B",
                "description": "",
                "input_format": "",
                "output_format": "",
                "output_sample": "",
                "output_judge": "",
                "time_limit": 1000,
                "memory_limit": 1024,
            }))
            .send()
            .await;

        assert_error!(res, error::DUPLICATE_PROBLEM_TITLE);
    }

    #[tokio::test]
    async fn invalid_limits() {
        let app = App::new().await;

        let res = app
            .post("/v1/problems")
            .json(&json!({
                "title": "Broken",
                "description": "",
                "input_format": "",
                "output_format": "",
                "output_sample": "",
                "output_judge": "",
                "time_limit": 0,
                "memory_limit": 1024,
            }))
            .send()
            .await;

        assert_error!(res, error::JSON_VALIDATE_INVALID);
    }

    #[tokio::test]
    async fn missing_fields() {
        let app = App::new().await;

        let res = app
            .post("/v1/problems")
            .json(&json!({ "title": "Incomplete" }))
            .send()
            .await;

        assert_error!(res, error::JSON_MISSING_FIELDS);
    }

    #[tokio::test]
    async fn unknown_problem_set() {
        let app = App::new().await;

        let res = app
            .post("/v1/problems")
            .json(&json!({
                "title": "Orphan",
                "description": "",
                "input_format": "",
                "output_format": "",
                "output_sample": "",
                "output_judge": "",
                "time_limit": 1000,
                "memory_limit": 1024,
                "problem_set": 42,
            }))
            .send()
            .await;

        assert_error!(res, error::INVALID_REFERENCE);
    }
}

mod update {
    use super::*;

    #[tokio::test]
    async fn null_clears_nullable_field() {
        let app = App::new().await;
        let problem = app.create_problem("A + B").await;
        let url = format!("/v1/problems/{}", id(&problem));

        let res = app
            .patch(&url)
            .json(&json!({ "hint": "Mind the overflow." }))
            .send()
            .await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = res.json().await;
        assert_eq!(body["hint"], "Mind the overflow.");

        let res = app
            .patch(&url)
            .json(&json!({ "hint": null, "approved": true }))
            .send()
            .await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = res.json().await;
        assert_eq!(body["hint"], Value::Null);
        assert_eq!(body["approved"], true);
        // Omitted fields keep their value.
        assert_eq!(body["input_sample"], "1 2");
    }

    #[tokio::test]
    async fn not_found() {
        let app = App::new().await;

        let res = app
            .patch("/v1/problems/99")
            .json(&json!({ "approved": true }))
            .send()
            .await;

        assert_error!(res, error::PROBLEM_NOT_FOUND);
    }
}

mod problem_sets {
    use super::*;

    #[tokio::test]
    async fn problems_of_set() {
        let app = App::new().await;

        let res = app
            .post("/v1/problem_sets")
            .json(&json!({ "name": "Warmup" }))
            .send()
            .await;
        assert_eq!(res.status(), StatusCode::CREATED);
        let set: Value = res.json().await;

        let problem = app.create_problem("A + B").await;
        app.create_problem("A - B").await;

        let res = app
            .patch(&format!("/v1/problems/{}", id(&problem)))
            .json(&json!({ "problem_set": id(&set) }))
            .send()
            .await;
        assert_eq!(res.status(), StatusCode::OK);

        let res = app
            .get(&format!("/v1/problem_sets/{}/problems", id(&set)))
            .send()
            .await;
        assert_eq!(res.status(), StatusCode::OK);

        let body: Value = res.json().await;
        assert_eq!(body.as_array().unwrap().len(), 1);
        assert_eq!(body[0]["title"], "A + B");
    }

    #[tokio::test]
    async fn duplicate_name() {
        let app = App::new().await;

        for expected in [StatusCode::CREATED, StatusCode::BAD_REQUEST] {
            let res = app
                .post("/v1/problem_sets")
                .json(&json!({ "name": "Warmup" }))
                .send()
                .await;

            assert_eq!(res.status(), expected);
        }
    }
}

mod attributes {
    use super::*;

    #[tokio::test]
    async fn add_list_and_delete() {
        let app = App::new().await;
        let problem = app.create_problem("A + B").await;
        let url = format!("/v1/problems/{}/attributes", id(&problem));

        let res = app
            .post(&url)
            .json(&json!({ "key": "difficulty", "value": "easy" }))
            .send()
            .await;
        assert_eq!(res.status(), StatusCode::CREATED);
        let attribute: Value = res.json().await;

        let res = app.get(&url).send().await;
        let body: Value = res.json().await;
        assert_json_eq!(
            body,
            json!([{
                "id": id(&attribute),
                "problem": id(&problem),
                "key": "difficulty",
                "value": "easy",
            }])
        );

        let res = app
            .delete(&format!("/v1/problem_attributes/{}", id(&attribute)))
            .send()
            .await;
        assert_eq!(res.status(), StatusCode::NO_CONTENT);

        let res = app.get(&url).send().await;
        let body: Value = res.json().await;
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn removed_with_problem() {
        let app = App::new().await;
        let problem = app.create_problem("A + B").await;

        let res = app
            .post("/v1/problem_attributes")
            .json(&json!({ "problem": id(&problem), "key": "tag", "value": "math" }))
            .send()
            .await;
        assert_eq!(res.status(), StatusCode::CREATED);
        let attribute: Value = res.json().await;

        let res = app
            .delete(&format!("/v1/problems/{}", id(&problem)))
            .send()
            .await;
        assert_eq!(res.status(), StatusCode::NO_CONTENT);

        let res = app
            .get(&format!("/v1/problem_attributes/{}", id(&attribute)))
            .send()
            .await;
        assert_error!(res, error::PROBLEM_ATTRIBUTE_NOT_FOUND);
    }

    #[tokio::test]
    async fn unknown_problem() {
        let app = App::new().await;

        let res = app
            .post("/v1/problem_attributes")
            .json(&json!({ "problem": 7, "key": "tag", "value": "math" }))
            .send()
            .await;

        assert_error!(res, error::PROBLEM_NOT_FOUND);
    }
}
