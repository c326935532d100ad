pub mod resolve_domain;

pub use resolve_domain::ResolveDomainUseCase;
