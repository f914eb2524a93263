use crate::config::{ServerConfig, StoreKind};
use crate::error::StackTrace;
use crate::handler::{AppModule, BookApplication};
use driver::database::{InMemoryDatabase, PostgresDatabase};
use error_stack::ResultExt;
use kernel::KernelError;
use std::future::{Future, IntoFuture};
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

mod config;
mod controller;
mod error;
mod handler;
mod request;
mod response;
mod route;

const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);

#[tokio::main]
async fn main() -> Result<(), StackTrace> {
    let appender = tracing_appender::rolling::daily(std::path::Path::new("./logs/"), "debug.log");
    let (non_blocking_appender, _guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_filter(tracing_subscriber::EnvFilter::new(
                    std::env::var("RUST_LOG").unwrap_or_else(|_| {
                        "driver=debug,server=debug,tower_http=debug,sqlx=info".into()
                    }),
                ))
                .with_filter(tracing_subscriber::filter::LevelFilter::DEBUG),
        )
        .with(
            tracing_subscriber::fmt::Layer::default()
                .with_writer(non_blocking_appender)
                .with_ansi(false)
                .with_filter(tracing_subscriber::filter::LevelFilter::DEBUG),
        )
        .init();

    let config = ServerConfig::from_env()?;
    tracing::info!(?config, "starting book server");
    match config.store {
        StoreKind::Postgres => serve(PostgresDatabase::new().await?, config.port).await?,
        StoreKind::Memory => serve(InMemoryDatabase::new(), config.port).await?,
    }

    Ok(())
}

async fn serve<D: BookApplication>(
    database: D,
    port: u16,
) -> error_stack::Result<(), KernelError> {
    let router = route::router(AppModule::new(database));

    let bind = SocketAddr::from(([0, 0, 0, 0], port));
    let tcp = TcpListener::bind(bind)
        .await
        .change_context_lazy(|| KernelError::Internal)
        .attach_printable_lazy(|| "Failed to listen tcp")?;
    tracing::info!("listening on {bind}");

    let (signalled, drain_started) = oneshot::channel();
    let server = axum::serve(tcp, router.into_make_service())
        .with_graceful_shutdown(async move {
            shutdown_signal().await;
            let _ = signalled.send(());
        })
        .into_future();

    match drain(server, drain_started, SHUTDOWN_TIMEOUT).await {
        Some(result) => result.change_context_lazy(|| KernelError::Internal)?,
        None => tracing::warn!("in-flight requests abandoned after {SHUTDOWN_TIMEOUT:?}"),
    }

    tracing::info!("server stopped");
    Ok(())
}

/// Runs `server` to completion, giving up `limit` after `drain_started` fires.
async fn drain<F: Future>(
    server: F,
    drain_started: oneshot::Receiver<()>,
    limit: Duration,
) -> Option<F::Output> {
    let deadline = async move {
        match drain_started.await {
            Ok(()) => tokio::time::sleep(limit).await,
            Err(_) => std::future::pending::<()>().await,
        }
    };
    tokio::select! {
        output = server => Some(output),
        () = deadline => None,
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for ctrl-c: {error}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(error) => {
                tracing::error!("failed to listen for SIGTERM: {error}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutting down server");
}
