use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct GenerateResponse {
    pub result: String,
}
