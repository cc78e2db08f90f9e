mod client;
mod fqname;

pub use client::{ApiServerClient, AUTH_TOKEN_HEADER};
pub use fqname::{FqNameRequest, FqNameResponse};
