use std::net::{IpAddr, Ipv4Addr};

/// Port the HTTP listener binds to when none is configured
pub const DEFAULT_PORT: u16 = 5000;

/// Address the HTTP listener binds to when none is configured
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);

/// SQLite database file used when no path is configured
pub const DEFAULT_DATABASE_FILE: &str = "books.db";

/// Payload returned by the root route
pub const WELCOME_MESSAGE: &str = "Welcome to the Book API with ORM!";
