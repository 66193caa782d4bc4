pub mod lane;
pub mod record;
