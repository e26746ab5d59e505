use super::const_error;

const_error!(INTERNAL, INTERNAL_SERVER_ERROR, 0, "internal server error");
const_error!(
    JSON_MISSING_FIELDS,
    UNPROCESSABLE_ENTITY,
    1,
    "missing or invalid fields"
);
const_error!(JSON_SYNTAX_ERROR, BAD_REQUEST, 2, "syntax error");
const_error!(
    JSON_CONTENT_TYPE,
    BAD_REQUEST,
    3,
    "missing or wrong content-type"
);
const_error!(JSON_VALIDATE_INVALID, BAD_REQUEST, 4, "invalid data");
const_error!(JSON_DESERIALIZE, INTERNAL_SERVER_ERROR, 5, "failed to deserialize json");
const_error!(DATABASE_ERROR, INTERNAL_SERVER_ERROR, 6, "database error");
const_error!(INVALID_PATH, BAD_REQUEST, 7, "invalid path parameter");
const_error!(
    COULD_NOT_GET_CLAIMS,
    UNAUTHORIZED,
    8,
    "could not get claims"
);
const_error!(JWT_INVALID_TOKEN, UNAUTHORIZED, 9, "invalid token");
const_error!(
    NOT_ENOUGH_PERMISSIONS,
    FORBIDDEN,
    10,
    "not enough permissions"
);
const_error!(
    INVALID_REFERENCE,
    BAD_REQUEST,
    11,
    "referenced row does not exist"
);
const_error!(USER_NOT_FOUND, NOT_FOUND, 12, "user not found");
const_error!(DUPLICATE_USERNAME, BAD_REQUEST, 13, "username exists");
const_error!(PROBLEM_SET_NOT_FOUND, NOT_FOUND, 14, "problem set not found");
const_error!(
    DUPLICATE_PROBLEM_SET_NAME,
    BAD_REQUEST,
    15,
    "problem set name exists"
);
const_error!(PROBLEM_NOT_FOUND, NOT_FOUND, 16, "problem not found");
const_error!(
    DUPLICATE_PROBLEM_TITLE,
    BAD_REQUEST,
    17,
    "problem title exists"
);
const_error!(
    PROBLEM_ATTRIBUTE_NOT_FOUND,
    NOT_FOUND,
    18,
    "problem attribute not found"
);
const_error!(COMMENT_NOT_FOUND, NOT_FOUND, 19, "comment not found");
const_error!(
    PARENT_COMMENT_MISMATCH,
    BAD_REQUEST,
    20,
    "parent comment belongs to another problem"
);
const_error!(ATTACHMENT_NOT_FOUND, NOT_FOUND, 21, "attachment not found");
const_error!(MISSING_FILENAME, BAD_REQUEST, 22, "missing filename");
const_error!(TEAM_NOT_FOUND, NOT_FOUND, 23, "team not found");
const_error!(DUPLICATE_TEAM_NAME, BAD_REQUEST, 24, "team name exists");
const_error!(ALREADY_IN_TEAM, BAD_REQUEST, 25, "already in team");
const_error!(
    NO_SUCH_MEMBER,
    BAD_REQUEST,
    26,
    "user is not a member of the team"
);
const_error!(LANGUAGE_NOT_FOUND, NOT_FOUND, 27, "language not found");
const_error!(
    DUPLICATE_LANGUAGE_NAME,
    BAD_REQUEST,
    28,
    "language name exists"
);
const_error!(
    DUPLICATE_LANGUAGE_SHORT_NAME,
    BAD_REQUEST,
    29,
    "language short name exists"
);
const_error!(CONTEST_NOT_FOUND, NOT_FOUND, 30, "contest not found");
const_error!(
    DUPLICATE_CONTEST_NAME,
    BAD_REQUEST,
    31,
    "contest name exists"
);
const_error!(
    INVALID_CONTEST_TIME,
    BAD_REQUEST,
    32,
    "end time must be after begin time"
);
const_error!(
    CONTEST_PASSWORD_REQUIRED,
    BAD_REQUEST,
    33,
    "password protected contest needs a password"
);
const_error!(
    CONTEST_TYPE_MISMATCH,
    BAD_REQUEST,
    34,
    "contest does not accept this kind of registration"
);
const_error!(ALREADY_REGISTERED, BAD_REQUEST, 35, "already registered");
const_error!(
    REGISTRATION_NOT_FOUND,
    NOT_FOUND,
    36,
    "registration not found"
);
const_error!(JUDGE_NOT_FOUND, NOT_FOUND, 37, "judge not found");
const_error!(SUBMISSION_NOT_FOUND, NOT_FOUND, 38, "submission not found");
const_error!(LOCKED_SUBMISSION, BAD_REQUEST, 39, "locked submission");
const_error!(
    PROBLEM_NOT_IN_CONTEST,
    BAD_REQUEST,
    40,
    "problem is not part of the contest"
);
const_error!(
    LANGUAGE_NOT_IN_CONTEST,
    BAD_REQUEST,
    41,
    "language is not allowed in the contest"
);
const_error!(SETTING_NOT_FOUND, NOT_FOUND, 42, "setting not found");
const_error!(PROFILE_NOT_FOUND, NOT_FOUND, 43, "profile not found");
const_error!(
    DUPLICATE_PROFILE,
    BAD_REQUEST,
    44,
    "user already has a profile"
);
const_error!(INVALID_QUERY, BAD_REQUEST, 45, "invalid query string");
const_error!(
    COMMENT_CYCLE,
    BAD_REQUEST,
    46,
    "a comment cannot reply to its own reply"
);

#[cfg(test)]
pub(super) const ALL: &[super::Error<'static>] = &[
    INTERNAL,
    JSON_MISSING_FIELDS,
    JSON_SYNTAX_ERROR,
    JSON_CONTENT_TYPE,
    JSON_VALIDATE_INVALID,
    JSON_DESERIALIZE,
    DATABASE_ERROR,
    INVALID_PATH,
    COULD_NOT_GET_CLAIMS,
    JWT_INVALID_TOKEN,
    NOT_ENOUGH_PERMISSIONS,
    INVALID_REFERENCE,
    USER_NOT_FOUND,
    DUPLICATE_USERNAME,
    PROBLEM_SET_NOT_FOUND,
    DUPLICATE_PROBLEM_SET_NAME,
    PROBLEM_NOT_FOUND,
    DUPLICATE_PROBLEM_TITLE,
    PROBLEM_ATTRIBUTE_NOT_FOUND,
    COMMENT_NOT_FOUND,
    PARENT_COMMENT_MISMATCH,
    ATTACHMENT_NOT_FOUND,
    MISSING_FILENAME,
    TEAM_NOT_FOUND,
    DUPLICATE_TEAM_NAME,
    ALREADY_IN_TEAM,
    NO_SUCH_MEMBER,
    LANGUAGE_NOT_FOUND,
    DUPLICATE_LANGUAGE_NAME,
    DUPLICATE_LANGUAGE_SHORT_NAME,
    CONTEST_NOT_FOUND,
    DUPLICATE_CONTEST_NAME,
    INVALID_CONTEST_TIME,
    CONTEST_PASSWORD_REQUIRED,
    CONTEST_TYPE_MISMATCH,
    ALREADY_REGISTERED,
    REGISTRATION_NOT_FOUND,
    JUDGE_NOT_FOUND,
    SUBMISSION_NOT_FOUND,
    LOCKED_SUBMISSION,
    PROBLEM_NOT_IN_CONTEST,
    LANGUAGE_NOT_IN_CONTEST,
    SETTING_NOT_FOUND,
    PROFILE_NOT_FOUND,
    DUPLICATE_PROFILE,
    INVALID_QUERY,
    COMMENT_CYCLE,
];
