pub mod lookup_service;
#[cfg(test)]
pub mod stub_lookup;
pub mod types;
