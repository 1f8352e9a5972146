use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use docchat::application::ports::{FileLoader, LlmClient, SessionRepository};
use docchat::application::services::{ConversationService, DocumentService, SessionService};
use docchat::infrastructure::llm::{GeminiClient, MockLlmClient};
use docchat::infrastructure::observability::{TracingConfig, init_tracing};
use docchat::infrastructure::persistence::InMemorySessionRepository;
use docchat::infrastructure::text_processing::PdfAdapter;
use docchat::presentation::{AppState, Environment, LlmProvider, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("failed to load settings")?;

    init_tracing(&TracingConfig {
        environment: environment.to_string(),
        default_filter: settings.logging.filter.clone(),
        json_format: settings.logging.enable_json,
    });

    let file_loader = Arc::new(PdfAdapter::new());

    match settings.llm.provider {
        LlmProvider::Gemini => {
            if settings.llm.api_key.is_empty() {
                tracing::warn!("No Gemini API key configured; set APP_LLM__API_KEY");
            }
            let llm_client = Arc::new(GeminiClient::new(
                settings.llm.api_key.clone(),
                settings.llm.model.clone(),
                settings.llm.base_url.clone(),
            ));
            tracing::info!(model = %llm_client.model(), "Using Gemini client");
            serve(settings, file_loader, llm_client).await
        }
        LlmProvider::Mock => {
            tracing::info!("Using mock LLM client");
            serve(settings, file_loader, Arc::new(MockLlmClient)).await
        }
    }
}

async fn serve<F, L>(
    settings: Settings,
    file_loader: Arc<F>,
    llm_client: Arc<L>,
) -> anyhow::Result<()>
where
    F: FileLoader + 'static,
    L: LlmClient + 'static,
{
    let sessions: Arc<dyn SessionRepository> = Arc::new(InMemorySessionRepository::new());

    let state = AppState {
        session_service: Arc::new(SessionService::new(Arc::clone(&sessions))),
        document_service: Arc::new(DocumentService::new(file_loader, Arc::clone(&sessions))),
        conversation_service: Arc::new(ConversationService::new(llm_client, sessions)),
        settings: settings.clone(),
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("invalid server.host / server.port")?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
