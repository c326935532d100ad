pub mod records_file_repository;

pub use records_file_repository::JsonFileRecordsRepository;
