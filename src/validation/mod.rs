pub mod fields;
pub mod verhoeff;

pub use fields::FieldValidator;
pub use verhoeff::verhoeff_check;
