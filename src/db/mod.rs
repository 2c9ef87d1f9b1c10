/// Database operations, grouped per table.
pub mod revoked_tokens;
pub mod users;
