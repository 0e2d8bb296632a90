use menva::read_default_file;
use sentry::ClientInitGuard;
use tokio::task::JoinSet;

use crate::{
    config::SharedConfig,
    service::{Service, ServiceExt},
    state::SharedState,
};

use super::tracing::init_tracing;

/// Owns the tokio runtime and runs every registered service on it.
#[derive(Default)]
pub struct ServicesOrquestrator {
    config: SharedConfig,
    services: Vec<Service>,
    sentry_guard: Option<ClientInitGuard>,
}

impl ServicesOrquestrator {
    pub fn load_environment_variables(self) -> Self {
        read_default_file();
        self
    }

    pub fn set_config_from_env(mut self) -> Self {
        self.config = SharedConfig::from_env();
        self
    }

    pub fn init_tracing(mut self) -> Self {
        self.sentry_guard = init_tracing(&self.config.env, self.config.sentry_token());
        self
    }

    pub fn add_service(mut self, service: Service) -> Self {
        self.services.push(service);
        self
    }

    async fn start_services(
        config: SharedConfig,
        services: Vec<Service>,
    ) -> Vec<Result<(), std::io::Error>> {
        let mut set = JoinSet::new();

        let state = SharedState::new(&config);

        for mut service in services {
            service.set_up(state.clone()).await;

            set.spawn(service.run());
        }

        set.join_all().await
    }

    pub fn run(self) -> Result<(), std::io::Error> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .worker_threads(self.config.worker_threads)
            .max_blocking_threads(self.config.max_blocking_threads)
            .build()?;

        let results = runtime.block_on(Self::start_services(self.config, self.services));
        drop(self.sentry_guard);

        for result in results {
            if let Err(e) = &result {
                tracing::error!(error = %e, "service stopped with an error");
            }
            result?;
        }
        Ok(())
    }
}
