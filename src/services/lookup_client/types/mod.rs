pub mod lookup_error;
pub mod zippopotam_response;
