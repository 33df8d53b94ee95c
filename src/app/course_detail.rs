//! Course detail screen: single-course view, enrolled roster, edit and
//! delete actions. Absence of the loaded course is the loading signal.

use crate::app::exec::{execute, Submission};
use crate::app::{ConfirmPrompt, CourseFormController, FormMode, Route};
use crate::interface::GatewayApi;
use crate::model::structs::{Course, Student};
use crate::notify::NotificationSink;

const DELETE_FAILURE_MESSAGE: &str = "Failed to delete course. Please try again later.";

pub struct CourseDetailController {
    course_id: String,
    pub course: Option<Course>,
    pub roster: Vec<Student>,
}

impl CourseDetailController {
    pub fn new(course_id: impl Into<String>) -> CourseDetailController {
        CourseDetailController {
            course_id: course_id.into(),
            course: None,
            roster: Vec::new(),
        }
    }

    pub fn loading(&self) -> bool {
        self.course.is_none()
    }

    /// Mount-time fetch of the course plus its roster. A failure leaves the
    /// screen in its loading state and is logged only.
    pub async fn load<G: GatewayApi>(&mut self, gateway: &G) {
        match gateway.course_details(&self.course_id).await {
            Ok(value) => {
                match serde_json::from_value::<Course>(value["course"].clone()) {
                    Ok(course) => self.course = Some(course),
                    Err(e) => {
                        tracing::error!(error = %e, "malformed course details");
                        return;
                    }
                }
                self.roster =
                    serde_json::from_value(value["studentsList"].clone()).unwrap_or_default();
            }
            Err(e) => tracing::error!(error = %e, "error fetching course details"),
        }
    }

    /// Hands the loaded entity to its edit form, the way the dashboard
    /// passes it along as navigation state. `None` while still loading.
    pub fn edit(&self) -> Option<(Route, CourseFormController)> {
        let course = self.course.as_ref()?;
        Some((
            Route::CourseEdit(course.id.clone()),
            CourseFormController::new(FormMode::Edit(course.clone())),
        ))
    }

    /// Deletes the course after interactive confirmation. Declining makes
    /// no gateway call at all.
    pub async fn delete<G: GatewayApi>(
        &self,
        gateway: &G,
        prompt: &mut impl ConfirmPrompt,
        notices: &mut impl NotificationSink,
    ) -> Option<Route> {
        let course = self.course.as_ref()?;

        if !prompt.confirm("Are you sure you want to delete this course?") {
            notices.info("Course deletion canceled");
            return None;
        }

        match execute(gateway.delete_course(&course.id), DELETE_FAILURE_MESSAGE).await {
            Submission::Completed(_) => {
                notices.success("Course deleted successfully");
                Some(Route::CourseList)
            }
            Submission::Failed(message) => {
                notices.error(message);
                None
            }
        }
    }
}
