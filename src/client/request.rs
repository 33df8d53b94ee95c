//! reqwest implementation of the gateway API.
//!
//! Each operation sends the bearer token resolved at construction time and
//! returns the decoded JSON body. Non-2xx responses are turned into errors
//! before decoding.

use reqwest::Client;
use serde_json::Value;

use crate::auth::AuthContext;
use crate::error::Result;
use crate::interface::{GatewayApi, HttpClient};
use crate::model::dtos::{CourseForm, FeePayment, StudentForm};

/// Fixed deployment host of the institute backend.
pub const BASE_URL: &str = "https://insituite-management-backend.onrender.com";

#[derive(Debug, Clone)]
pub struct GatewayClient {
    client: Client,
    base_url: String,
    auth: AuthContext,
}

impl GatewayClient {
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl HttpClient for GatewayClient {
    fn new(base_url: impl Into<String>, auth: AuthContext) -> Result<Self> {
        let client = Client::builder().build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            auth,
        })
    }
}

impl GatewayApi for GatewayClient {
    async fn add_course(&self, form: CourseForm) -> Result<Value> {
        let resp = self
            .client
            .post(self.url("/course/add-course"))
            .header("Authorization", self.auth.bearer())
            .multipart(form.into_multipart())
            .send()
            .await?
            .error_for_status()?;

        Ok(resp.json::<Value>().await?)
    }

    async fn update_course(&self, course_id: &str, form: CourseForm) -> Result<Value> {
        let resp = self
            .client
            .put(self.url(&format!("/course/update-course/{course_id}")))
            .header("Authorization", self.auth.bearer())
            .multipart(form.into_multipart())
            .send()
            .await?
            .error_for_status()?;

        Ok(resp.json::<Value>().await?)
    }

    async fn all_courses(&self) -> Result<Value> {
        // The dashboard sends a multipart content type on this bodyless GET;
        // kept as the backend expects it.
        let resp = self
            .client
            .get(self.url("/course/all-courses/"))
            .header("Authorization", self.auth.bearer())
            .header("Content-Type", "multipart/form-data")
            .send()
            .await?
            .error_for_status()?;

        Ok(resp.json::<Value>().await?)
    }

    async fn course_details(&self, course_id: &str) -> Result<Value> {
        let resp = self
            .client
            .get(self.url(&format!("/course/course-details/{course_id}")))
            .header("Authorization", self.auth.bearer())
            .header("Content-Type", "multipart/form-data")
            .send()
            .await?
            .error_for_status()?;

        Ok(resp.json::<Value>().await?)
    }

    async fn delete_course(&self, course_id: &str) -> Result<Value> {
        let resp = self
            .client
            .delete(self.url(&format!("/course/{course_id}")))
            .header("Authorization", self.auth.bearer())
            .header("Content-Type", "multipart/form-data")
            .send()
            .await?
            .error_for_status()?;

        Ok(resp.json::<Value>().await?)
    }

    async fn home_summary(&self) -> Result<Value> {
        let resp = self
            .client
            .get(self.url("/course/home"))
            .header("Authorization", self.auth.bearer())
            .header("Content-Type", "multipart/form-data")
            .send()
            .await?
            .error_for_status()?;

        Ok(resp.json::<Value>().await?)
    }

    async fn add_student(&self, form: StudentForm) -> Result<Value> {
        let resp = self
            .client
            .post(self.url("/student/add-student"))
            .header("Authorization", self.auth.bearer())
            .multipart(form.into_multipart())
            .send()
            .await?
            .error_for_status()?;

        Ok(resp.json::<Value>().await?)
    }

    async fn update_student(&self, student_id: &str, form: StudentForm) -> Result<Value> {
        let resp = self
            .client
            .put(self.url(&format!("/student/{student_id}")))
            .header("Authorization", self.auth.bearer())
            .multipart(form.into_multipart())
            .send()
            .await?
            .error_for_status()?;

        Ok(resp.json::<Value>().await?)
    }

    async fn add_fee(&self, payment: FeePayment) -> Result<Value> {
        let resp = self
            .client
            .post(self.url("/fee/add-fee"))
            .header("Authorization", self.auth.bearer())
            .json(&payment)
            .send()
            .await?
            .error_for_status()?;

        Ok(resp.json::<Value>().await?)
    }
}

/// Client bound to the fixed deployment host.
pub fn create_client(auth: AuthContext) -> Result<GatewayClient> {
    GatewayClient::new(BASE_URL, auth)
}
