mod continuity_config;
mod defaults;

pub use continuity_config::ContinuityConfig;
