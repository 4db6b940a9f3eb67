//! Keyboard-focus visibility context.
//!
//! The machinery that decides whether the user is driving the interface with
//! the keyboard lives in the host application; components here only read the
//! flag to pick a focus-ring styling hook.

use dioxus::prelude::*;

/// Read-only flag describing whether keyboard navigation is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FocusVisibility {
    pub using_keyboard: bool,
}

/// Installs a fixed focus-visibility value for the subtree. Hosts that track
/// input modality render this near the root and re-mount on changes.
#[component]
pub fn FocusVisibilityProvider(
    #[props(default = false)] using_keyboard: bool,
    children: Element,
) -> Element {
    use_context_provider(|| FocusVisibility { using_keyboard });

    rsx! {
        {children}
    }
}

/// Current focus-visibility flag, `false` when no provider is installed.
pub fn use_focus_visible() -> bool {
    try_consume_context::<FocusVisibility>()
        .map(|focus| focus.using_keyboard)
        .unwrap_or(false)
}
