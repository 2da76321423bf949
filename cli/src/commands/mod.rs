pub mod generate;
pub mod info;
