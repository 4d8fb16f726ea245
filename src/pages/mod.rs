mod home;

pub use home::Home;

/// Destination of the "Get Started" call to action.
pub const DASHBOARD_PATH: &str = "/dashboard";
/// Destination of the "Log in" link.
pub const LOGIN_PATH: &str = "/login";
