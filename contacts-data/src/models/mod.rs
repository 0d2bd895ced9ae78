/// Database models for the contacts service
///
/// This module contains the entity models stored through the generic
/// repository together with their field-level validation rules.
///
/// # Models
///
/// - `contact`: Organization contact records (soft-deletable)

pub mod contact;
