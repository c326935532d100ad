pub mod records;
pub mod resolve;

pub use records::GetResolutionTableUseCase;
pub use resolve::ResolveDomainUseCase;
