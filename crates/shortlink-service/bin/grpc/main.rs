mod cli;
mod server;

use crate::cli::{StorageBackendArg, CLI};
use crate::server::UrlShortenerGrpcServer;
use clap::Parser;
use shortlink_core::Repository;
use shortlink_proto_schema::v1::url_shortener_server::UrlShortenerServer;
use shortlink_service::{Base62Generator, LinkService};
use shortlink_storage::{InMemoryRepository, PgRepository};
use tonic::transport::{Identity, Server, ServerTlsConfig};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let config = CLI::try_parse()?;

    info!(
        listen_addr = %config.listen_addr,
        storage_backend = %config.storage,
        tls = config.tls,
        "starting shortlink gRPC server"
    );

    let tls = tls_config(&config).await?;

    match config.storage {
        StorageBackendArg::InMemory => {
            run_server(
                config.listen_addr,
                tls,
                InMemoryRepository::new(),
                Base62Generator::new(),
            )
            .await?;
        }
        StorageBackendArg::Postgres => {
            let dsn = config
                .postgres_dsn
                .ok_or("postgres dsn is required when storage backend is postgres")?;
            let repository = PgRepository::connect(&dsn, config.postgres_pool_size).await?;
            let pool = repository.clone();

            run_server(config.listen_addr, tls, repository, Base62Generator::new()).await?;

            // In-flight calls have drained once serve returns.
            pool.close().await;
        }
    }

    Ok(())
}

async fn tls_config(config: &CLI) -> Result<Option<ServerTlsConfig>, Box<dyn std::error::Error>> {
    if !config.tls {
        return Ok(None);
    }

    let cert_file = config
        .cert_file
        .as_ref()
        .ok_or("cert file is required when tls is enabled")?;
    let key_file = config
        .key_file
        .as_ref()
        .ok_or("key file is required when tls is enabled")?;

    let cert = tokio::fs::read(cert_file).await?;
    let key = tokio::fs::read(key_file).await?;

    Ok(Some(
        ServerTlsConfig::new().identity(Identity::from_pem(cert, key)),
    ))
}

async fn run_server<R: Repository>(
    listen_addr: std::net::SocketAddr,
    tls: Option<ServerTlsConfig>,
    repository: R,
    generator: Base62Generator,
) -> Result<(), Box<dyn std::error::Error>> {
    let service = UrlShortenerGrpcServer::new(LinkService::new(repository, generator));

    let (health_reporter, health_service) = tonic_health::server::health_reporter();
    health_reporter
        .set_serving::<UrlShortenerServer<UrlShortenerGrpcServer<R, Base62Generator>>>()
        .await;

    let mut builder = Server::builder();
    if let Some(tls) = tls {
        builder = builder.tls_config(tls)?;
    }

    builder
        .add_service(health_service)
        .add_service(UrlShortenerServer::new(service))
        .serve_with_shutdown(listen_addr, shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
    info!("shutdown signal received, draining in-flight calls");
}
