mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{LeaSettings, LimitSettings, ServerSettings, Settings};
