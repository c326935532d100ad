mod records_access_guard;

pub use records_access_guard::RecordsAccessGuard;
