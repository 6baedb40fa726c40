pub mod find;
pub mod serve;
