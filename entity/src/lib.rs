//! Table definitions of the online judge.
//!
//! Every module is one table. Choice columns are stored as small integers (or a
//! one character string for [`user_profiles::Gender`]) and exposed as enums.

pub mod comment_attachments;
pub mod comments;
pub mod contest_languages;
pub mod contest_problems;
pub mod contest_teams;
pub mod contest_users;
pub mod contests;
pub mod judges;
pub mod languages;
pub mod problem_attributes;
pub mod problem_sets;
pub mod problems;
pub mod settings;
pub mod starred_problems;
pub mod submissions;
pub mod team_members;
pub mod teams;
pub mod user_profiles;
pub mod users;
