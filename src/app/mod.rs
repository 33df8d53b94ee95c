//! Application module - per-screen controllers
//!
//! Each screen of the dashboard maps to one controller: editable field
//! state, a busy flag while a request is outstanding, and a submit/load
//! entry point that talks to the gateway and reports through the
//! notification sink.

pub mod course_detail;
pub mod course_form;
pub mod dashboard;
pub mod exec;
pub mod fee_form;
pub mod student_form;

pub use course_detail::CourseDetailController;
pub use course_form::CourseFormController;
pub use dashboard::DashboardController;
pub use fee_form::FeeFormController;
pub use student_form::StudentFormController;

/// Client-side navigation targets the controllers resolve to after a
/// successful action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    CourseList,
    CourseDetail(String),
    CourseEdit(String),
    StudentList,
    StudentDetail(String),
    PaymentHistory,
}

/// Explicit create-vs-edit mode for the entity forms. Edit carries the
/// existing entity that would otherwise travel as navigation state.
#[derive(Debug, Clone)]
pub enum FormMode<T> {
    Create,
    Edit(T),
}

impl<T> FormMode<T> {
    pub fn is_edit(&self) -> bool {
        matches!(self, FormMode::Edit(_))
    }
}

/// Interactive yes/no confirmation before destructive actions.
pub trait ConfirmPrompt {
    fn confirm(&mut self, message: &str) -> bool;
}
