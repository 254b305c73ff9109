pub mod alert;
pub mod enums;
pub mod lab;
pub mod vital_sign;

pub use alert::*;
pub use lab::*;
pub use vital_sign::*;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("Invalid {field} value: {value:?}")]
    InvalidEnum { field: String, value: String },
}
