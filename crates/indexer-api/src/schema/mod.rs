pub mod query;
pub mod types;

use async_graphql::{EmptyMutation, EmptySubscription, Schema};
use indexer_store::MagentaStore;
use std::sync::Arc;

pub use query::QueryRoot;

/// GraphQL Schema type
pub type ApiSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

/// Build the GraphQL schema over the in-memory store
pub fn build_schema(store: Arc<MagentaStore>) -> ApiSchema {
    Schema::build(QueryRoot, EmptyMutation, EmptySubscription)
        .data(store)
        .finish()
}
