#![allow(unused_imports)]

pub(crate) use super::macros::*;
pub use super::{fixtures::id, App};
pub use assert_json_diff::{assert_json_eq, assert_json_include};
pub use http::StatusCode;
pub use oj_backend::error;
pub use reqwest::Method;
pub use serde_json::{json, Value};
