//! Notification Banner
//!
//! Fixed-position flash messages that dismiss themselves. Banners stack
//! independently; there is no queue or cap.

use leptos::prelude::*;

use crate::config::UiConfig;
use crate::models::Notification;
use crate::schedule::{self, CancelToken, ExitPhase};

const BANNER_POSITION: &str =
    "position: fixed; top: 100px; right: 20px; z-index: 9999; max-width: 350px;";

pub fn banner_style(leaving: bool, exit_animation: &str) -> String {
    let animation = if leaving {
        exit_animation
    } else {
        "slideIn 0.3s ease-out"
    };
    format!("{} animation: {};", BANNER_POSITION, animation)
}

/// Mount a banner on `<body>` and schedule its exit
pub fn show(config: &UiConfig, notification: Notification) {
    let Some(body) = crate::dom::document().and_then(|d| d.body()) else {
        web_sys::console::log_1(&format!("[Notify] no body for: {}", notification.message).into());
        return;
    };

    let leaving = ArcRwSignal::new(false);
    let view_leaving = leaving.clone();
    let exit_animation = config.slide_out();
    let class = notification.class_name();
    let message = notification.message;

    let handle = leptos::mount::mount_to(body, move || {
        view! {
            <div class=class style=move || banner_style(view_leaving.get(), &exit_animation)>
                {message}
            </div>
        }
    });

    let mut handle = Some(handle);
    schedule::spawn_chain(
        schedule::exit_chain(config.notification_ttl_ms, config.exit_animation_ms),
        CancelToken::new(),
        move |phase| match phase {
            ExitPhase::Leave => leaving.set(true),
            // Dropping the handle unmounts the banner
            ExitPhase::Detach => drop(handle.take()),
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_style_switches_animation() {
        let entering = banner_style(false, "slideOut 300ms ease-in");
        assert!(entering.starts_with("position: fixed; top: 100px; right: 20px;"));
        assert!(entering.contains("slideIn"));

        let leaving = banner_style(true, "slideOut 300ms ease-in");
        assert!(leaving.ends_with("animation: slideOut 300ms ease-in;"));
    }
}
