/// Security primitives for the gateway: password hashing, bearer-token
/// issuance/validation, and reset-token generation.
pub mod jwt;
pub mod password;
pub mod reset_token;

pub use jwt::{Claims, JwtKeys};
pub use password::{hash_password, verify_password};
