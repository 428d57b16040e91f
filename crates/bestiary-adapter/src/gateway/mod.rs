//! Outbound adapters - The creature API and its wire format

pub mod http;
pub mod json_record;
