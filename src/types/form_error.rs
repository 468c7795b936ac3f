use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum FormError {
    #[error("name is required")]
    MissingName,
    #[error("invalid {field}: {value:?}")]
    InvalidNumber { field: &'static str, value: String },
    #[error("invalid birthdate: {year}-{month}-{day}")]
    InvalidDate { year: i32, month: u32, day: u32 },
    #[error("birth year filter must contain digits only, got {0:?}")]
    InvalidYearFilter(String),
}
