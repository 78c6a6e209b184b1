pub mod bs;
pub mod normal;
