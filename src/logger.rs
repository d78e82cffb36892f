use crate::config::Config;

/// One-time startup announcement: listening port, environment, version.
pub fn log_server_start(config: &Config) {
    println!("Server running on port {}", config.port);
    println!("Environment: {}", config.environment);
    println!("Version: {}", config.app_version);
}

pub fn log_accept_error(err: &std::io::Error) {
    eprintln!("[Error] Failed to accept connection: {err}");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[Error] Failed to serve connection: {err:?}");
}

pub fn log_build_error(what: &str, err: &impl std::fmt::Display) {
    eprintln!("[Error] Failed to build {what} response: {err}");
}
