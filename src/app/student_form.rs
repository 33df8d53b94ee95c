//! Add/edit student screen.
//!
//! Unlike the course form there is no client-side required-field check;
//! the gateway is trusted to reject bad submissions. The course selector
//! is populated from a mount-time fetch and locked in edit mode, since
//! course reassignment is not permitted after creation.

use crate::app::exec::{execute, Submission};
use crate::app::{FormMode, Route};
use crate::interface::GatewayApi;
use crate::model::dtos::{ImageUpload, StudentForm};
use crate::model::structs::{Course, Student};
use crate::notify::NotificationSink;

const FAILURE_MESSAGE: &str = "Failed to process the request. Please try again.";

pub struct StudentFormController {
    pub full_name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub course_id: String,
    pub image: Option<ImageUpload>,
    pub course_list: Vec<Course>,
    pub busy: bool,
    mode: FormMode<Student>,
}

impl StudentFormController {
    pub fn new(mode: FormMode<Student>) -> StudentFormController {
        let mut controller = StudentFormController {
            full_name: String::new(),
            phone: String::new(),
            email: String::new(),
            address: String::new(),
            course_id: String::new(),
            image: None,
            course_list: Vec::new(),
            busy: false,
            mode: FormMode::Create,
        };

        if let FormMode::Edit(ref student) = mode {
            controller.full_name = student.full_name.clone();
            controller.phone = student.phone.clone();
            controller.email = student.email.clone();
            controller.address = student.address.clone();
            controller.course_id = student.course_id.clone();
        }

        controller.mode = mode;
        controller
    }

    pub fn is_edit(&self) -> bool {
        self.mode.is_edit()
    }

    /// The course selector is rendered disabled in edit mode.
    pub fn course_locked(&self) -> bool {
        self.mode.is_edit()
    }

    /// Mount-time fetch of the course list, independent of mode. A failure
    /// leaves the list empty and is logged only.
    pub async fn load_courses<G: GatewayApi>(&mut self, gateway: &G) {
        match gateway.all_courses().await {
            Ok(value) => match serde_json::from_value::<Vec<Course>>(value["courses"].clone()) {
                Ok(courses) => self.course_list = courses,
                Err(e) => tracing::error!(error = %e, "malformed course list"),
            },
            Err(e) => tracing::error!(error = %e, "failed to load courses"),
        }
    }

    fn payload(&self) -> StudentForm {
        StudentForm {
            full_name: self.full_name.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
            address: self.address.clone(),
            course_id: self.course_id.clone(),
            image: self.image.clone(),
        }
    }

    pub async fn submit<G: GatewayApi>(
        &mut self,
        gateway: &G,
        notices: &mut impl NotificationSink,
    ) -> Option<Route> {
        self.busy = true;

        let payload = self.payload();
        let result = match self.mode {
            FormMode::Create => execute(gateway.add_student(payload), FAILURE_MESSAGE).await,
            FormMode::Edit(ref student) => {
                execute(gateway.update_student(&student.id, payload), FAILURE_MESSAGE).await
            }
        };

        let route = match result {
            Submission::Completed(value) => {
                let message = value["message"]
                    .as_str()
                    .unwrap_or("Student added successfully")
                    .to_string();
                notices.success(message);
                match self.mode {
                    FormMode::Create => Some(Route::StudentList),
                    FormMode::Edit(ref student) => Some(Route::StudentDetail(student.id.clone())),
                }
            }
            Submission::Failed(message) => {
                notices.error(message);
                None
            }
        };

        self.busy = false;
        route
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::testing::{FakeGateway, GatewayCall};
    use crate::notify::{NoticeLevel, NoticeLog};
    use serde_json::json;

    fn existing_student() -> Student {
        Student {
            id: "s7".to_string(),
            full_name: "Jane Doe".to_string(),
            phone: "9998887770".to_string(),
            email: "jane@example.com".to_string(),
            address: "12 Hill Road".to_string(),
            course_id: "c42".to_string(),
            image_url: None,
        }
    }

    #[tokio::test]
    async fn mount_fetch_populates_course_selector() {
        let gateway = FakeGateway::new().respond_with(json!({
            "courses": [
                { "_id": "c1", "courseName": "Rust Basics" },
                { "_id": "c2", "courseName": "Advanced Rust" }
            ]
        }));
        let mut form = StudentFormController::new(FormMode::Create);

        form.load_courses(&gateway).await;

        assert_eq!(form.course_list.len(), 2);
        assert_eq!(form.course_list[1].course_name, "Advanced Rust");
        assert!(!form.course_locked());
    }

    #[tokio::test]
    async fn course_list_failure_is_silent() {
        let gateway = FakeGateway::new().fail_next();
        let mut form = StudentFormController::new(FormMode::Create);

        form.load_courses(&gateway).await;

        assert!(form.course_list.is_empty());
    }

    #[tokio::test]
    async fn edit_mode_prefills_and_locks_the_course() {
        let form = StudentFormController::new(FormMode::Edit(existing_student()));

        assert_eq!(form.full_name, "Jane Doe");
        assert_eq!(form.course_id, "c42");
        assert!(form.course_locked());
    }

    #[tokio::test]
    async fn create_submits_without_client_validation() {
        // All fields empty: the gateway is still called.
        let gateway = FakeGateway::new().respond_with(json!({}));
        let mut notices = NoticeLog::new();
        let mut form = StudentFormController::new(FormMode::Create);

        let route = form.submit(&gateway, &mut notices).await;

        assert_eq!(route, Some(Route::StudentList));
        assert_eq!(gateway.call_count(), 1);
        assert_eq!(notices.last().unwrap().message, "Student added successfully");
    }

    #[tokio::test]
    async fn update_uses_entity_id_and_server_message() {
        let gateway = FakeGateway::new().respond_with(json!({ "message": "Student updated" }));
        let mut notices = NoticeLog::new();
        let mut form = StudentFormController::new(FormMode::Edit(existing_student()));
        form.phone = "1112223334".to_string();

        let route = form.submit(&gateway, &mut notices).await;

        assert_eq!(route, Some(Route::StudentDetail("s7".to_string())));
        assert_eq!(notices.last().unwrap().message, "Student updated");
        let calls = gateway.calls.borrow();
        match &calls[..] {
            [GatewayCall::UpdateStudent(id, payload)] => {
                assert_eq!(id, "s7");
                assert_eq!(payload.phone, "1112223334");
            }
            other => panic!("unexpected calls: {other:?}"),
        }
    }

    #[tokio::test]
    async fn failure_reports_and_stays() {
        let gateway = FakeGateway::new().fail_next();
        let mut notices = NoticeLog::new();
        let mut form = StudentFormController::new(FormMode::Create);

        let route = form.submit(&gateway, &mut notices).await;

        assert_eq!(route, None);
        assert_eq!(notices.last().unwrap().level, NoticeLevel::Error);
        assert!(!form.busy);
    }
}
