use tracing_subscriber::EnvFilter;

use crate::Result;

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise a sensible default keeps the bot crates
/// at info level.
pub fn init(service_name: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "info,friday=info,friday_core=info,{service_name}=info"
        ))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(true)
        .init();

    Ok(())
}
