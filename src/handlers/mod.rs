pub mod auth;

pub use auth::{
    change_password, forgot_password, profile, reset_password, signin, signout, signup,
};
