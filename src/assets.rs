//! Photo assets: data-URL transport encoding and print-resolution preparation.

pub mod data_url;
pub mod photo;
