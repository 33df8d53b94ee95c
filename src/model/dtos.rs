use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};

/// An image file attached to a course or student submission.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    fn into_part(self) -> Part {
        Part::bytes(self.bytes).file_name(self.file_name)
    }
}

/// Outbound payload for course create/update requests.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CourseForm {
    pub course_name: String,
    pub description: String,
    pub price: String,
    pub starting_date: String,
    pub end_date: String,
    pub image: Option<ImageUpload>,
}

impl CourseForm {
    /// Builds the multipart body. The `image` part is attached only when a
    /// file was selected.
    pub fn into_multipart(self) -> Form {
        let mut form = Form::new()
            .text("courseName", self.course_name)
            .text("description", self.description)
            .text("price", self.price)
            .text("startingDate", self.starting_date)
            .text("endDate", self.end_date);
        if let Some(image) = self.image {
            form = form.part("image", image.into_part());
        }
        form
    }
}

/// Outbound payload for student create/update requests.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StudentForm {
    pub full_name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub course_id: String,
    pub image: Option<ImageUpload>,
}

impl StudentForm {
    pub fn into_multipart(self) -> Form {
        let mut form = Form::new()
            .text("fullName", self.full_name)
            .text("address", self.address)
            .text("email", self.email)
            .text("phone", self.phone)
            .text("courseId", self.course_id);
        if let Some(image) = self.image {
            form = form.part("image", image.into_part());
        }
        form
    }
}

/// JSON payload for fee collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeePayment {
    #[serde(rename = "fullName")]
    pub full_name: String,
    pub amount: String,
    pub phone: String,
    pub remark: String,
    #[serde(rename = "courseId")]
    pub course_id: String,
}
