//! Fee collection screen.
//!
//! Amount and phone go through a digit-only input mask: a value containing
//! anything but digits is rejected wholesale, leaving the field unchanged.
//! All five fields carry required semantics, so `submit` is gated on
//! `ready()` before the handler body runs.

use crate::app::exec::{execute, Submission};
use crate::app::Route;
use crate::interface::GatewayApi;
use crate::model::dtos::FeePayment;
use crate::model::structs::Course;
use crate::notify::NotificationSink;

pub struct FeeFormController {
    pub full_name: String,
    amount: String,
    phone: String,
    pub remark: String,
    pub course_id: String,
    pub course_list: Vec<Course>,
    pub busy: bool,
}

impl FeeFormController {
    pub fn new() -> FeeFormController {
        FeeFormController {
            full_name: String::new(),
            amount: String::new(),
            phone: String::new(),
            remark: String::new(),
            course_id: String::new(),
            course_list: Vec::new(),
            busy: false,
        }
    }

    pub fn amount(&self) -> &str {
        &self.amount
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Accepts the new amount only if it is all digits (or empty).
    pub fn set_amount(&mut self, value: &str) {
        if value.chars().all(|c| c.is_ascii_digit()) {
            self.amount = value.to_string();
        }
    }

    /// Same digit mask as the amount field.
    pub fn set_phone(&mut self, value: &str) {
        if value.chars().all(|c| c.is_ascii_digit()) {
            self.phone = value.to_string();
        }
    }

    /// Required semantics over all five fields; submission is blocked
    /// before the handler runs while this is false.
    pub fn ready(&self) -> bool {
        !self.full_name.is_empty()
            && !self.amount.is_empty()
            && !self.phone.is_empty()
            && !self.remark.is_empty()
            && !self.course_id.is_empty()
    }

    /// Mount-time fetch for the course selector. This screen does surface
    /// the failure.
    pub async fn load_courses<G: GatewayApi>(
        &mut self,
        gateway: &G,
        notices: &mut impl NotificationSink,
    ) {
        match gateway.all_courses().await {
            Ok(value) => match serde_json::from_value::<Vec<Course>>(value["courses"].clone()) {
                Ok(courses) => self.course_list = courses,
                Err(e) => {
                    tracing::error!(error = %e, "malformed course list");
                    notices.error("Failed to load courses");
                }
            },
            Err(e) => {
                tracing::error!(error = %e, "failed to load courses");
                notices.error("Failed to load courses");
            }
        }
    }

    pub async fn submit<G: GatewayApi>(
        &mut self,
        gateway: &G,
        notices: &mut impl NotificationSink,
    ) -> Option<Route> {
        if !self.ready() {
            return None;
        }

        self.busy = true;

        let payment = FeePayment {
            full_name: self.full_name.clone(),
            amount: self.amount.clone(),
            phone: self.phone.clone(),
            remark: self.remark.clone(),
            course_id: self.course_id.clone(),
        };

        let route = match execute(gateway.add_fee(payment), "Failed to submit fee").await {
            Submission::Completed(_) => {
                notices.success("Fee successfully submitted");
                self.full_name.clear();
                self.phone.clear();
                self.remark.clear();
                self.amount.clear();
                self.course_id.clear();
                Some(Route::PaymentHistory)
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

impl Default for FeeFormController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::testing::{FakeGateway, GatewayCall};
    use crate::notify::{NoticeLevel, NoticeLog};
    use serde_json::json;

    fn filled_form() -> FeeFormController {
        let mut form = FeeFormController::new();
        form.full_name = "Jane Doe".to_string();
        form.set_amount("500");
        form.set_phone("9998887770");
        form.remark = "March fee".to_string();
        form.course_id = "abc123".to_string();
        form
    }

    #[test]
    fn digit_mask_rejects_non_numeric_input() {
        let mut form = FeeFormController::new();
        form.set_amount("500");
        form.set_amount("500x");
        assert_eq!(form.amount(), "500");

        form.set_phone("99988");
        form.set_phone("99988-");
        assert_eq!(form.phone(), "99988");

        // Clearing the field is always allowed.
        form.set_amount("");
        assert_eq!(form.amount(), "");
    }

    #[test]
    fn ready_requires_all_five_fields() {
        let mut form = filled_form();
        assert!(form.ready());
        form.remark.clear();
        assert!(!form.ready());
    }

    #[tokio::test]
    async fn incomplete_form_issues_no_request() {
        let gateway = FakeGateway::new();
        let mut notices = NoticeLog::new();
        let mut form = FeeFormController::new();

        let route = form.submit(&gateway, &mut notices).await;

        assert_eq!(route, None);
        assert_eq!(gateway.call_count(), 0);
        assert!(notices.notices.is_empty());
    }

    #[tokio::test]
    async fn submit_posts_exact_payload_then_resets_and_navigates() {
        let gateway = FakeGateway::new().respond_with(json!({ "message": "ok" }));
        let mut notices = NoticeLog::new();
        let mut form = filled_form();

        let route = form.submit(&gateway, &mut notices).await;

        assert_eq!(route, Some(Route::PaymentHistory));
        let calls = gateway.calls.borrow();
        assert_eq!(
            calls[..],
            [GatewayCall::AddFee(FeePayment {
                full_name: "Jane Doe".to_string(),
                amount: "500".to_string(),
                phone: "9998887770".to_string(),
                remark: "March fee".to_string(),
                course_id: "abc123".to_string(),
            })]
        );
        assert_eq!(notices.last().unwrap().message, "Fee successfully submitted");

        // Every field is reset on success.
        assert!(form.full_name.is_empty());
        assert!(form.amount().is_empty());
        assert!(form.phone().is_empty());
        assert!(form.remark.is_empty());
        assert!(form.course_id.is_empty());
        assert!(!form.busy);
    }

    #[tokio::test]
    async fn failure_keeps_fields_and_reports() {
        let gateway = FakeGateway::new().fail_next();
        let mut notices = NoticeLog::new();
        let mut form = filled_form();

        let route = form.submit(&gateway, &mut notices).await;

        assert_eq!(route, None);
        assert_eq!(form.amount(), "500");
        let notice = notices.last().unwrap();
        assert_eq!(notice.level, NoticeLevel::Error);
        assert_eq!(notice.message, "Failed to submit fee");
        assert!(!form.busy);
    }

    #[tokio::test]
    async fn course_load_failure_is_surfaced_here() {
        let gateway = FakeGateway::new().fail_next();
        let mut notices = NoticeLog::new();
        let mut form = FeeFormController::new();

        form.load_courses(&gateway, &mut notices).await;

        assert!(form.course_list.is_empty());
        assert_eq!(notices.last().unwrap().message, "Failed to load courses");
    }
}
