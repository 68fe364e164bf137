pub mod domain;
pub mod error;
pub mod phone;

pub use domain::*;
pub use error::CoreError;
pub use phone::{
    clean_raw_input_value, make_partial_value, normalize_input, trim_country_calling_code,
    PartialInput,
};
