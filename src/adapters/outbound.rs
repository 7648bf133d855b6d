pub mod customer_file;
pub mod records;
pub mod terminal;
