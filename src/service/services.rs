use axum::{extract::Request, Router};
use std::net::SocketAddr;
use tokio::{net::TcpListener, signal};

use crate::{
    config::{APIConfig, ServiceConfig},
    state::{APIState, SharedState},
};

use super::{get_router, AppRouter};

#[derive(Clone)]
pub struct Service {
    env_prefix: String,
    config: Option<APIConfig>,
    router_factory: fn(APIState) -> Router<APIState>,
    router: Option<AppRouter>,
}

impl Service {
    /// The config is read at set up from the variables prefixed by `env_prefix`.
    pub fn api(env_prefix: &str, router_factory: fn(APIState) -> Router<APIState>) -> Self {
        Self {
            env_prefix: env_prefix.to_owned(),
            config: None,
            router_factory,
            router: None,
        }
    }

    pub fn router(&self) -> Option<&AppRouter> {
        self.router.as_ref()
    }
}

impl ServiceExt for Service {
    fn stub(self) -> Self {
        Self {
            env_prefix: self.env_prefix,
            config: Some(APIConfig::stub()),
            router_factory: self.router_factory,
            router: None,
        }
    }

    async fn set_up(&mut self, shared: SharedState) {
        let config = self
            .config
            .get_or_insert_with(|| APIConfig::from_env_with_prefix(&self.env_prefix));
        let state = APIState::new(config.clone(), shared);
        let routes = (self.router_factory)(state.clone());
        self.router = Some(get_router(config, state, routes));
    }

    async fn run(self) -> Result<(), std::io::Error> {
        let (Some(config), Some(router)) = (self.config, self.router) else {
            return Err(std::io::Error::other("service was not set up"));
        };
        let listener = TcpListener::bind(config.socket_addr()).await?;
        config.print();
        tracing::info!(addr = %listener.local_addr()?, "listening");
        axum::serve(
            listener,
            axum::ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(router),
        )
        .with_graceful_shutdown(shutdown_signal())
        .await
    }
}

pub trait ServiceExt {
    fn stub(self) -> Self;
    fn set_up(&mut self, _shared: SharedState) -> impl std::future::Future<Output = ()> {
        async {}
    }
    fn run(self) -> impl std::future::Future<Output = Result<(), std::io::Error>> + Send;
}

pub async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
        tracing::info!("shutdown gracefully from ctrl-c");
        },
        _ = terminate => {
        tracing::info!("shutdown gracefully from signal");
        },
    }
}
