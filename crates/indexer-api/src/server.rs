use crate::config::ApiConfig;
use crate::schema::{build_schema, ApiSchema};
use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::State,
    response::{Html, IntoResponse},
    routing::get,
    Router,
};
use indexer_store::MagentaStore;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

/// GraphQL API server
pub struct ApiServer {
    config: ApiConfig,
    schema: ApiSchema,
}

impl ApiServer {
    pub fn new(config: ApiConfig, store: Arc<MagentaStore>) -> Self {
        let schema = build_schema(store);

        Self { config, schema }
    }

    /// Start the server
    pub async fn run(self) -> crate::Result<()> {
        let addr = self.config.address();

        let cors = if self.config.cors_enabled {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            CorsLayer::new()
        };

        let app = Router::new()
            .route("/", get(graphiql).post(graphql_handler))
            .route("/graphql", get(graphiql).post(graphql_handler))
            .route("/health", get(health_check))
            .with_state(self.schema)
            .layer(cors)
            .layer(TraceLayer::new_for_http());

        info!(address = %addr, "Starting GraphQL API server");

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| crate::ApiError::Server(e.to_string()))?;

        axum::serve(listener, app)
            .await
            .map_err(|e| crate::ApiError::Server(e.to_string()))?;

        Ok(())
    }
}

/// GraphQL handler
async fn graphql_handler(
    State(schema): State<ApiSchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

/// GraphiQL playground
async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "ok"
}
