mod tapos_error;
pub use tapos_error::TaposError;
