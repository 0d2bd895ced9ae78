/// API route handlers
///
/// This module contains all route handlers organized by resource:
///
/// - `health`: Health check endpoint
/// - `contacts`: Contact CRUD endpoints

pub mod contacts;
pub mod health;
