/// Test fixtures and helpers shared by the unit tests.
use crate::models::user::{SigninRequest, SignupRequest};
use crate::security::JwtKeys;

pub const TEST_NAME: &str = "Ann";
pub const TEST_EMAIL: &str = "ann@x.com";
pub const TEST_PASSWORD: &str = "secret1";

pub const TEST_JWT_SECRET: &str = "unit-test-secret";

pub fn test_jwt_keys() -> JwtKeys {
    JwtKeys::from_secret(TEST_JWT_SECRET)
}

pub fn valid_signup_request() -> SignupRequest {
    SignupRequest {
        name: TEST_NAME.to_string(),
        email: TEST_EMAIL.to_string(),
        password: TEST_PASSWORD.to_string(),
    }
}

pub fn valid_signin_request() -> SigninRequest {
    SigninRequest {
        email: TEST_EMAIL.to_string(),
        password: TEST_PASSWORD.to_string(),
    }
}
