use serde::{Deserialize, Serialize};

/// Body of `POST /fqname-to-id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FqNameRequest {
    #[serde(rename = "type")]
    pub kind: String,
    pub fq_name: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FqNameResponse {
    pub uuid: String,
}
