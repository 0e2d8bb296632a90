use sentry::ClientInitGuard;
use sentry_tracing::EventFilter;
use tracing::Level;
use tracing_subscriber::{fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Env;

/// JSON logs filtered by `RUST_LOG`, plus Sentry when a token is configured.
///
/// The returned guard flushes pending Sentry events when dropped, keep it alive
/// for as long as the process runs.
pub fn init_tracing(env: &Env, sentry_token: Option<&str>) -> Option<ClientInitGuard> {
    let registry = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .log_internal_errors(true)
                .with_file(true)
                .with_line_number(true)
                .with_thread_ids(true)
                .with_thread_names(true)
                .with_current_span(true)
                .with_span_events(FmtSpan::CLOSE)
                .with_span_list(true)
                .with_target(true),
        );

    let Some(token) = sentry_token else {
        registry.init();
        return None;
    };

    let debug = matches!(env, Env::Development | Env::Test);
    let guard = sentry::init((
        token,
        sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: Some(env.to_string().into()),
            debug,
            ..Default::default()
        },
    ));

    let sentry_layer = sentry_tracing::layer().event_filter(|md| {
        if *md.level() <= Level::WARN {
            EventFilter::Event
        } else {
            EventFilter::Ignore
        }
    });

    registry.with(sentry_layer).init();
    Some(guard)
}
