pub mod account_reader;
pub mod account_writer;
pub mod operation_reader;
