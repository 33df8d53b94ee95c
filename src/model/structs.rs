use serde::{Deserialize, Serialize};

// Entities as the gateway transmits them. Identifiers are opaque strings
// assigned server-side; this crate never generates one.

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Course {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "courseName")]
    pub course_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: String,
    #[serde(rename = "startingDate", default)]
    pub starting_date: String,
    #[serde(rename = "endDate", default)]
    pub end_date: String,
    #[serde(rename = "imageUrl", default)]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Student {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "fullName")]
    pub full_name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: String,
    #[serde(rename = "courseId", default)]
    pub course_id: String,
    #[serde(rename = "imageUrl", default)]
    pub image_url: Option<String>,
}

/// Server-computed aggregates for the home screen.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DashboardSummary {
    #[serde(rename = "totalAmount", default)]
    pub total_amount: i64,
    #[serde(default)]
    pub students: Vec<Student>,
    #[serde(rename = "totalStudent", default)]
    pub total_student: i64,
    #[serde(rename = "totalCourse", default)]
    pub total_course: i64,
}
