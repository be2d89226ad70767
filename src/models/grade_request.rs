// src/models/grade_request.rs

use serde::Deserialize;
use validator::Validate;

/// DTO for a grading request: the two raw text blobs from the form.
#[derive(Debug, Deserialize, Validate)]
pub struct GradeRequest {
    #[validate(length(
        max = 100000,
        message = "Answer key must be at most 100000 characters."
    ))]
    pub answer_key: String,
    #[validate(length(
        max = 1000000,
        message = "Submissions must be at most 1000000 characters."
    ))]
    pub submissions: String,
}
