//! Process-wide tracing subscriber

use crate::config::Environment;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset. Request spans are emitted at
/// DEBUG, so only dev and staging show per-request `/Main` traffic.
fn default_directives(env: &Environment) -> String {
    let service = env!("CARGO_CRATE_NAME");
    match env {
        Environment::Dev => format!("{service}=debug,tower_http=debug,info"),
        Environment::Staging => format!("{service}=debug,tower_http=info,info"),
        Environment::Prod => format!("{service}=info,tower_http=info,warn"),
    }
}

pub fn init_logging(env: &Environment) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(env)));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_file(env.is_dev())
        .with_line_number(env.is_dev());

    // One JSON object per line in production for the log shipper
    if env.is_prod() {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer.json().with_current_span(true))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer.pretty())
            .init();
    }

    tracing::info!(
        service = env!("CARGO_PKG_NAME"),
        version = env!("CARGO_PKG_VERSION"),
        "Logging initialized for {:?} environment",
        env
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_directives_name_this_crate() {
        for env in [Environment::Dev, Environment::Staging, Environment::Prod] {
            let directives = default_directives(&env);
            assert!(directives.starts_with("procurement_report_service="));
            assert!(EnvFilter::try_new(&directives).is_ok(), "{directives}");
        }
    }

    #[test]
    fn only_production_quiets_dependencies_to_warn() {
        assert!(default_directives(&Environment::Prod).ends_with(",warn"));
        assert!(default_directives(&Environment::Dev).ends_with(",info"));
    }
}
