pub mod completion_service;
pub mod markdown;
pub mod outline_service;
pub mod user_service;
