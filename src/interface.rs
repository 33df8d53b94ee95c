#![allow(async_fn_in_trait)]

use crate::error::Result;
use crate::model::dtos::{CourseForm, FeePayment, StudentForm};
use serde_json::Value;

/// Common trait for HTTP client construction.
pub trait HttpClient {
    /// Create a new gateway client bound to a base URL and auth context.
    fn new(base_url: impl Into<String>, auth: crate::auth::AuthContext) -> Result<Self>
    where
        Self: Sized;
}

/// Resource operations exposed by the remote gateway. Every call carries the
/// bearer token; responses come back as raw JSON for the app layer to pick
/// apart.
pub trait GatewayApi {
    /// Create a course (multipart)
    async fn add_course(&self, form: CourseForm) -> Result<Value>;

    /// Update an existing course, keyed by its gateway identifier (multipart)
    async fn update_course(&self, course_id: &str, form: CourseForm) -> Result<Value>;

    /// List all courses
    async fn all_courses(&self) -> Result<Value>;

    /// Fetch one course plus its enrolled-student roster
    async fn course_details(&self, course_id: &str) -> Result<Value>;

    /// Delete a course
    async fn delete_course(&self, course_id: &str) -> Result<Value>;

    /// Combined dashboard aggregates
    async fn home_summary(&self) -> Result<Value>;

    /// Create a student (multipart)
    async fn add_student(&self, form: StudentForm) -> Result<Value>;

    /// Update an existing student (multipart)
    async fn update_student(&self, student_id: &str, form: StudentForm) -> Result<Value>;

    /// Record a fee payment (JSON)
    async fn add_fee(&self, payment: FeePayment) -> Result<Value>;
}
