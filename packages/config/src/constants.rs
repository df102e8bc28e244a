// ABOUTME: Environment variable name constants
// ABOUTME: Centralized definitions of all environment variable names used across Bookshelf

// Listener Configuration
pub const BOOKSHELF_PORT: &str = "BOOKSHELF_PORT";
pub const BOOKSHELF_HOST: &str = "BOOKSHELF_HOST";

// Storage Configuration
pub const BOOKSHELF_DATABASE_PATH: &str = "BOOKSHELF_DATABASE_PATH";

// Development Configuration
pub const BOOKSHELF_DEBUG: &str = "BOOKSHELF_DEBUG";

// Logging
pub const RUST_LOG: &str = "RUST_LOG";
