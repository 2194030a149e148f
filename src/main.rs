//! Directory HTTP service entry point.
//!
//! # Purpose
//! Wires configuration, observability, the in-memory store, and the HTTP
//! router, then serves the API and the metrics endpoint until Ctrl-C.
//!
//! # Notes
//! The `build_state` helper keeps wiring testable and minimizes main setup logic.
use directory::app::{AppState, build_router};
use directory::config::DirectoryConfig;
use directory::observability;
use directory::store::DirectoryStore;
use directory::store::memory::InMemoryStore;
use std::future::Future;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = DirectoryConfig::from_env_or_yaml()?;
    run_with_shutdown(config, async {
        let _ = tokio::signal::ctrl_c().await;
    })
    .await
}

async fn run_with_shutdown<F>(config: DirectoryConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let metrics_handle = observability::init_observability("directory-service")?;
    let state = build_state(&config);
    let metrics_addr = config.metrics_bind;
    // A metrics bind failure is logged; the API keeps serving without it.
    let metrics_task = tokio::spawn(async move {
        if let Err(err) = observability::serve_metrics(metrics_handle, metrics_addr).await {
            tracing::warn!(error = %err, %metrics_addr, "metrics listener failed");
        }
    });

    let app = build_router(state.clone());

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    let addr = listener.local_addr()?;
    tracing::info!(
        %addr,
        backend = state.store.backend_name(),
        durable = state.store.is_durable(),
        "directory service listening"
    );
    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!("directory service stopped");
    metrics_task.abort();
    let _ = metrics_task.await;
    Ok(())
}

fn build_state(config: &DirectoryConfig) -> AppState {
    let store: Arc<dyn DirectoryStore + Send + Sync> = Arc::new(InMemoryStore::new());
    AppState {
        store,
        pagination: config.pagination,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use directory::config::PaginationConfig;
    use serial_test::serial;

    fn test_config() -> DirectoryConfig {
        DirectoryConfig {
            bind_addr: "127.0.0.1:0".parse().expect("bind"),
            metrics_bind: "127.0.0.1:0".parse().expect("metrics"),
            pagination: PaginationConfig {
                default_page_size: 5,
                max_page_size: 20,
            },
        }
    }

    #[tokio::test]
    async fn build_state_memory_backend() {
        let state = build_state(&test_config());
        assert_eq!(state.store.backend_name(), "memory");
        assert!(!state.store.is_durable());
        assert_eq!(state.pagination.default_page_size, 5);
        let page = state.store.list_directories(0, 5).await.expect("list");
        assert_eq!(page.count, 0);
    }

    #[tokio::test(flavor = "multi_thread")]
    #[serial]
    async fn run_with_shutdown_starts_and_stops() {
        run_with_shutdown(test_config(), async {
            tokio::time::sleep(std::time::Duration::from_millis(100)).await;
        })
        .await
        .expect("run should stop cleanly");
    }

    #[tokio::test(flavor = "multi_thread")]
    #[serial]
    async fn metrics_bind_conflict_does_not_stop_the_api() {
        let taken = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("hold metrics port");
        let mut config = test_config();
        config.metrics_bind = taken.local_addr().expect("addr");
        run_with_shutdown(config, async {
            tokio::time::sleep(std::time::Duration::from_millis(100)).await;
        })
        .await
        .expect("api should run without metrics");
        drop(taken);
    }
}
