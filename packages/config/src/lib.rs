// ABOUTME: Configuration constants shared by the Bookshelf packages
// ABOUTME: Keeps environment variable names in one place

pub mod constants;
