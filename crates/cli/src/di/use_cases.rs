use axum::http::HeaderValue;
use dnsview_api::AppState;
use dnsview_application::services::RecordsAccessGuard;
use dnsview_application::use_cases::{GetResolutionTableUseCase, ResolveDomainUseCase};
use dnsview_domain::Config;
use dnsview_infrastructure::{
    repositories::JsonFileRecordsRepository, system::ExternalScriptRunner,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

pub struct UseCases {
    pub get_records: Arc<GetResolutionTableUseCase>,
    pub resolve_domain: Arc<ResolveDomainUseCase>,
}

impl UseCases {
    pub fn new(config: &Config) -> Self {
        let guard = RecordsAccessGuard::new(config.resolver.serialize_access);

        let records_path = config.records.file_path();
        let repository = Arc::new(JsonFileRecordsRepository::new(records_path.clone()));

        let script = Arc::new(
            ExternalScriptRunner::new(
                config.resolver.interpreter.clone(),
                config.resolver.script.clone(),
                config.records.shared_dir(),
            )
            .with_timeout(config.resolver.timeout_secs.map(Duration::from_secs)),
        );

        info!(
            records_file = %records_path.display(),
            interpreter = %config.resolver.interpreter,
            script = %config.resolver.script,
            timeout_secs = ?config.resolver.timeout_secs,
            serialize_access = guard.is_enabled(),
            "Use cases initialized"
        );

        Self {
            get_records: Arc::new(GetResolutionTableUseCase::new(repository, guard.clone())),
            resolve_domain: Arc::new(ResolveDomainUseCase::new(script, guard)),
        }
    }

    pub fn into_app_state(self, config: &Config) -> anyhow::Result<AppState> {
        let allowed_origin = HeaderValue::from_str(&config.server.allowed_origin)?;

        Ok(AppState {
            get_records: self.get_records,
            resolve_domain: self.resolve_domain,
            allowed_origin,
        })
    }
}
