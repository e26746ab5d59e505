use crate::extractors::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct RegisteredModel {
    name: &'static str,
    path: &'static str,
}

const fn model(name: &'static str, path: &'static str) -> RegisteredModel {
    RegisteredModel { name, path }
}

/// Models managed through the admin interface, in registration order.
const REGISTRY: &[RegisteredModel] = &[
    model("ProblemSet", "/v1/problem_sets"),
    model("Problem", "/v1/problems"),
    model("ProblemAttribute", "/v1/problem_attributes"),
    model("Comment", "/v1/comments"),
    model("CommentAttachment", "/v1/comment_attachments"),
    model("Team", "/v1/teams"),
    model("Language", "/v1/languages"),
    model("Contest", "/v1/contests"),
    model("ContestUser", "/v1/contest_users"),
    model("ContestTeam", "/v1/contest_teams"),
    model("Judge", "/v1/judges"),
    model("Submission", "/v1/submissions"),
    model("Settings", "/v1/settings"),
    model("UserProfile", "/v1/user_profiles"),
    model("User", "/v1/users"),
];

pub async fn registry() -> Json<&'static [RegisteredModel]> {
    Json(REGISTRY)
}
