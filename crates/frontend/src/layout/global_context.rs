use contracts::shared::config::PortalConfig;
use leptos::prelude::*;

/// App-wide UI state: the loaded configuration and sidebar visibility.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    config: StoredValue<PortalConfig>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new(config: PortalConfig) -> Self {
        Self {
            config: StoredValue::new(config),
            left_open: RwSignal::new(true),
        }
    }

    pub fn config(&self) -> PortalConfig {
        self.config.get_value()
    }

    pub fn demo_mode(&self) -> bool {
        self.config.with_value(|c| c.demo_mode)
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|open| *open = !*open);
    }
}

pub fn use_global_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not found")
}
