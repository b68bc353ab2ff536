pub mod arguments;
pub mod bumper;
pub mod errors;
pub mod manifest;
