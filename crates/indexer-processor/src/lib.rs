mod handlers;
mod pipeline;

pub use pipeline::EventProcessor;
