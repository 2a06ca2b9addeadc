//! Infrastructure layer - database bootstrap, seeding, state building and
//! error translation.

pub mod db;
pub mod db_errors;
pub mod seed;
pub mod state;
