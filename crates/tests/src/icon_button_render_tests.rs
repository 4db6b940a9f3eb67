use crate::common::render;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaCopy;
use dioxus_free_icons::Icon;
use trellis_ui::{IconButton, IconButtonSize, IconButtonVariant, RenderSpec};

#[test]
fn renders_a_button_with_the_accessible_name() {
    fn app() -> Element {
        rsx! {
            IconButton { aria_label: "Copy",
                Icon { width: 16, height: 16, icon: FaCopy }
            }
        }
    }

    let html = render(app);
    assert!(html.contains("<button"), "{html}");
    assert!(html.contains(r#"aria-label="Copy""#), "{html}");
    assert!(html.contains(r#"class="icon-button""#), "{html}");
    assert!(html.contains("<svg"), "{html}");
    assert!(html.contains(r#" type="button""#), "{html}");
}

#[test]
fn focusable_at_rest() {
    fn app() -> Element {
        rsx! {
            IconButton { aria_label: "Copy",
                Icon { width: 16, height: 16, icon: FaCopy }
            }
        }
    }

    let html = render(app);
    assert!(html.contains(r#"tabindex="0""#), "{html}");
}

#[test]
fn disabled_icon_button_is_skipped_by_keyboard_navigation() {
    fn app() -> Element {
        rsx! {
            IconButton { aria_label: "Copy", disabled: true,
                Icon { width: 16, height: 16, icon: FaCopy }
            }
        }
    }

    let html = render(app);
    assert!(html.contains(r#"tabindex="-1""#), "{html}");
    assert!(html.contains(r#" disabled="true""#), "{html}");
    assert!(html.contains(r#"aria-disabled="true""#), "{html}");
}

#[test]
fn disabled_anchor_keeps_aria_and_tab_skip_but_not_native_disabled() {
    fn app() -> Element {
        rsx! {
            IconButton {
                aria_label: "Docs",
                href: "https://mongodb.design",
                disabled: true,
                Icon { width: 16, height: 16, icon: FaCopy }
            }
        }
    }

    let html = render(app);
    assert!(html.contains("<a "), "{html}");
    assert!(html.contains(r#"aria-disabled="true""#), "{html}");
    assert!(html.contains(r#"tabindex="-1""#), "{html}");
    assert!(!html.contains(r#" disabled="true""#), "{html}");
}

#[test]
fn active_surfaces_as_a_styling_hook_only() {
    fn app() -> Element {
        rsx! {
            IconButton { aria_label: "Copy", active: true,
                Icon { width: 16, height: 16, icon: FaCopy }
            }
        }
    }

    let html = render(app);
    assert!(html.contains(r#"data-active="true""#), "{html}");
    assert!(html.contains(r#"aria-disabled="false""#), "{html}");
    assert!(html.contains(r#"tabindex="0""#), "{html}");
}

#[test]
fn variant_and_size_surface_as_styling_hooks() {
    fn app() -> Element {
        rsx! {
            IconButton {
                aria_label: "Copy",
                variant: IconButtonVariant::Dark,
                size: IconButtonSize::XLarge,
                Icon { width: 24, height: 24, icon: FaCopy }
            }
        }
    }

    let html = render(app);
    assert!(html.contains(r#"data-style="dark""#), "{html}");
    assert!(html.contains(r#"data-size="xlarge""#), "{html}");
    assert!(html.contains(r#"class="icon-button-icon""#), "{html}");
}

#[test]
fn custom_renderable_receives_the_composed_attributes() {
    fn app() -> Element {
        let renderer = Callback::new(|spec: RenderSpec| {
            rsx! {
                span { ..spec.attributes, {spec.children} }
            }
        });
        rsx! {
            IconButton { aria_label: "Copy", component: renderer, disabled: true,
                Icon { width: 16, height: 16, icon: FaCopy }
            }
        }
    }

    let html = render(app);
    assert!(!html.contains("<button"), "{html}");
    assert!(html.contains(r#"aria-label="Copy""#), "{html}");
    assert!(html.contains(r#"aria-disabled="true""#), "{html}");
    assert!(html.contains(r#"tabindex="-1""#), "{html}");
}
