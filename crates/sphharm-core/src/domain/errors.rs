use std::error::Error;
use std::fmt::{Display, Formatter};

pub type SphResult<T> = Result<T, SphError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SphErrorCategory {
    InputValidationError,
    IoSystemError,
    ComputationError,
}

impl SphErrorCategory {
    pub const fn exit_status(self) -> ExitStatus {
        match self {
            Self::InputValidationError => ExitStatus {
                exit_code: 2,
                category_name: "InputValidationError",
            },
            Self::IoSystemError => ExitStatus {
                exit_code: 3,
                category_name: "IoSystemError",
            },
            Self::ComputationError => ExitStatus {
                exit_code: 4,
                category_name: "ComputationError",
            },
        }
    }

    pub const fn exit_code(self) -> i32 {
        self.exit_status().exit_code
    }

    pub const fn category_name(self) -> &'static str {
        self.exit_status().category_name
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitStatus {
    pub exit_code: i32,
    pub category_name: &'static str,
}

/// Error carried across the library and CLI boundary.
///
/// `placeholder` is a stable dotted code (`INPUT.LEGENDRE_ORDER`) that scripts can
/// match on independently of the human-readable message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SphError {
    category: SphErrorCategory,
    placeholder: &'static str,
    message: String,
}

impl SphError {
    pub fn new(
        category: SphErrorCategory,
        placeholder: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self {
            category,
            placeholder,
            message: message.into(),
        }
    }

    pub fn input_validation(placeholder: &'static str, message: impl Into<String>) -> Self {
        Self::new(SphErrorCategory::InputValidationError, placeholder, message)
    }

    pub fn io_system(placeholder: &'static str, message: impl Into<String>) -> Self {
        Self::new(SphErrorCategory::IoSystemError, placeholder, message)
    }

    pub fn computation(placeholder: &'static str, message: impl Into<String>) -> Self {
        Self::new(SphErrorCategory::ComputationError, placeholder, message)
    }

    pub const fn category(&self) -> SphErrorCategory {
        self.category
    }

    pub const fn placeholder(&self) -> &'static str {
        self.placeholder
    }

    pub const fn exit_code(&self) -> i32 {
        self.category.exit_code()
    }

    pub fn diagnostic_line(&self) -> String {
        format!("ERROR: [{}] {}", self.placeholder, self.message)
    }

    pub fn fatal_exit_line(&self) -> String {
        format!("FATAL EXIT CODE: {}", self.exit_code())
    }
}

impl Display for SphError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}] {}",
            self.category.category_name(),
            self.placeholder,
            self.message
        )
    }
}

impl Error for SphError {}
