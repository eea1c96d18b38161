use std::fmt::{Debug, Display, Formatter};

use error_stack::{Context, Report};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KernelError {
    NotFound,
    PermissionDenied,
    Unauthenticated,
    Validation,
    ConstraintViolation,
    InvalidState,
    Timeout,
    Internal,
}

impl Display for KernelError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            KernelError::NotFound => write!(f, "Resource not found"),
            KernelError::PermissionDenied => write!(f, "Permission denied"),
            KernelError::Unauthenticated => write!(f, "Authentication required"),
            KernelError::Validation => write!(f, "Validation failed"),
            KernelError::ConstraintViolation => write!(f, "Constraint violated"),
            KernelError::InvalidState => write!(f, "Operation not allowed in current state"),
            KernelError::Timeout => write!(f, "Process timed out"),
            KernelError::Internal => write!(f, "Internal kernel error"),
        }
    }
}

impl Context for KernelError {}

/// Human readable message bound to one input field, carried as a report attachment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    field: &'static str,
    message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }

    pub fn field(&self) -> &'static str {
        self.field
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for FieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

pub trait KernelReportExt {
    fn attach_field_error(self, field: &'static str, message: impl Into<String>) -> Self;
    fn field_errors(&self) -> Vec<&FieldError>;
}

impl KernelReportExt for Report<KernelError> {
    fn attach_field_error(self, field: &'static str, message: impl Into<String>) -> Self {
        self.attach_printable(FieldError::new(field, message))
    }

    fn field_errors(&self) -> Vec<&FieldError> {
        let mut errors = self
            .frames()
            .filter_map(|frame| frame.downcast_ref::<FieldError>())
            .collect::<Vec<_>>();
        // frames are walked newest first
        errors.reverse();
        errors
    }
}

pub fn validation_error(field: &'static str, message: impl Into<String>) -> Report<KernelError> {
    Report::new(KernelError::Validation).attach_field_error(field, message)
}

#[cfg(test)]
mod test {
    use error_stack::Report;

    use crate::{validation_error, KernelError, KernelReportExt};

    #[test]
    fn field_errors_keep_attach_order() {
        let report = validation_error("isbn", "too short").attach_field_error("title", "empty");
        let errors = report
            .field_errors()
            .into_iter()
            .map(|error| (error.field(), error.message().to_string()))
            .collect::<Vec<_>>();
        assert_eq!(
            errors,
            vec![
                ("isbn", "too short".to_string()),
                ("title", "empty".to_string())
            ]
        );
        assert_eq!(*report.current_context(), KernelError::Validation);
    }

    #[test]
    fn plain_report_has_no_field_errors() {
        let report = Report::new(KernelError::NotFound).attach_printable("missing");
        assert!(report.field_errors().is_empty());
    }
}
