use taskdesk::{commands::Cli, libs::messages::macros::is_debug_mode};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    if is_debug_mode() {
        tracing_subscriber::registry()
            .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "taskdesk=debug".into()))
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    Cli::menu()
}
