use contracts::shared::config::{load_config, PortalConfig};
use leptos::prelude::*;
use leptos_router::components::Router;
use thaw::ConfigProvider;

use crate::layout::global_context::AppGlobalContext;
use crate::layout::toast_service::{ToastHost, ToastService};
use crate::routes::routes::AppRoutes;
use crate::system::auth::context::SessionProvider;

/// Embedded defaults, optionally overlaid at build time via `HSM_PORTAL_CONFIG`.
fn portal_config() -> PortalConfig {
    match load_config(option_env!("HSM_PORTAL_CONFIG")) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid portal configuration, using defaults: {}", e);
            PortalConfig::default()
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    let config = portal_config();
    log::info!(
        "Starting {} portal (demo mode: {})",
        config.barangay_name,
        config.demo_mode
    );

    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new(config));

    // Toasts are raised from anywhere, including the session provider.
    provide_context(ToastService::new());

    view! {
        <ConfigProvider>
            <SessionProvider>
                <Router>
                    <AppRoutes />
                </Router>
                <ToastHost />
            </SessionProvider>
        </ConfigProvider>
    }
}
