/*
[INPUT]:  Sign-in provider outcomes and profile payloads
[OUTPUT]: Authenticator trait, AuthError, UserProfile
[POS]:    Auth layer - authentication contract
[UPDATE]: When changing sign-in flow or profile schema
*/

pub mod authenticator;
pub mod profile;

pub use authenticator::{AuthError, Authenticated, Authenticator, StaticAuthenticator};
pub use profile::UserProfile;
