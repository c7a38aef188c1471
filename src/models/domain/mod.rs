pub mod user;
pub use user::SessionUser;
