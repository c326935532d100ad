pub mod get_resolution_table;

pub use get_resolution_table::GetResolutionTableUseCase;
