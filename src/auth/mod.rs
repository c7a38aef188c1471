pub mod claims;
pub mod google;
pub mod middleware;
pub mod session;

pub use claims::SessionClaims;
pub use google::{GoogleIdentityProvider, IdentityProvider};
pub use middleware::LoginRequired;
pub use session::SessionService;
