mod engine;
mod historical;
mod provider;
mod realtime;

pub use engine::SyncEngine;
pub use provider::ProviderManager;
