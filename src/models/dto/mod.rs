pub mod completion;
pub mod request;
pub mod response;
