pub mod cv;
pub mod record;
pub mod user;
