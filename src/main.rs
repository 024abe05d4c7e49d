use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;

use paperknife::application::services::SplitService;
use paperknife::infrastructure::archive::ZipArchiveWriter;
use paperknife::infrastructure::crypto::HttpLeaGateway;
use paperknife::infrastructure::media::ImageCodec;
use paperknife::infrastructure::naming::CsvNameListParser;
use paperknife::infrastructure::observability::{TracingConfig, init_tracing};
use paperknife::infrastructure::pdf::LopdfSplitter;
use paperknife::presentation::{AppState, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env();

    let tracing_config = TracingConfig {
        environment: settings.environment.to_string(),
        ..TracingConfig::default()
    };
    init_tracing(tracing_config, settings.server.port);

    let name_parser = Arc::new(CsvNameListParser::new());
    let splitter = Arc::new(LopdfSplitter::new(
        Duration::from_secs(settings.limits.split_timeout_secs),
        settings.limits.max_pages,
    ));
    let archive_writer = Arc::new(ZipArchiveWriter::new());
    let split_service = Arc::new(SplitService::new(name_parser, splitter, archive_writer));

    let image_transcoder = Arc::new(ImageCodec::new());
    let lea_client = Arc::new(
        HttpLeaGateway::new(
            settings.lea.endpoint.clone(),
            Duration::from_secs(settings.lea.timeout_secs),
        )
        .map_err(|e| anyhow::anyhow!("failed to build lea gateway: {e}"))?,
    );

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;

    let state = AppState {
        split_service,
        image_transcoder,
        lea_client,
        settings,
    };

    let router = create_router(state);

    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
