//! Registration and log-in for users.

mod log_in;
mod register;
mod state;

pub use log_in::{LogInForm, check_password, post_log_in};
pub use register::{
    NewUser, REGISTRATION_SUCCESS_MESSAGE, RegisterForm, post_register, prepare_new_user,
};
pub use state::AuthState;
