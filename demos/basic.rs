//! Standalone demo: opens a window with the saturation picker.

use floem::prelude::*;
use floem::window::WindowConfig;
use floem_saturation::{saturation_picker, HsvColor, PanelConfig, UsedColors};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("floem_saturation=debug")),
        )
        .init();

    let color = RwSignal::new(HsvColor::new(210.0, 0.75, 0.96));
    let config = PanelConfig {
        used_colors_capacity: 10,
        ..PanelConfig::default()
    };
    let used = RwSignal::new(UsedColors::from_config(&config));

    floem::Application::new()
        .window(
            move |_| {
                saturation_picker(color, used).on_event_stop(
                    floem::event::EventListener::WindowClosed,
                    |_| floem::quit_app(),
                )
            },
            Some(
                WindowConfig::default()
                    .size((260.0, 320.0))
                    .title("floem-saturation"),
            ),
        )
        .run();
}
