mod records_repository;
mod resolver_script;

pub use records_repository::RecordsRepository;
pub use resolver_script::{ResolverScript, ScriptRun};
