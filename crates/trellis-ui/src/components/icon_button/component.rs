use dioxus::prelude::*;

use crate::components::container::{computed_button_type, render_resolved};
use crate::polymorphic::{
    compose, merge_props, resolve, ContainerTag, CustomRenderer, ElementOverrides,
};

/// Color scheme for icon buttons.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum IconButtonVariant {
    #[default]
    Light,
    Dark,
}

impl IconButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            IconButtonVariant::Light => "light",
            IconButtonVariant::Dark => "dark",
        }
    }
}

/// Size of an icon button.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum IconButtonSize {
    #[default]
    Default,
    Large,
    XLarge,
}

impl IconButtonSize {
    fn class(&self) -> &'static str {
        match self {
            IconButtonSize::Default => "default",
            IconButtonSize::Large => "large",
            IconButtonSize::XLarge => "xlarge",
        }
    }
}

/// Attribute names the icon button derives itself; caller copies are
/// dropped.
const RESERVED: &[&str] = &[
    "class",
    "disabled",
    "aria-disabled",
    "tabindex",
    "type",
    "href",
    "aria-label",
    "data-style",
    "data-size",
    "data-active",
];

#[derive(Props, Clone, PartialEq)]
pub struct IconButtonProps {
    #[props(default)]
    pub variant: IconButtonVariant,
    #[props(default)]
    pub size: IconButtonSize,
    /// Surfaced as a styling hook; has no effect on focus or disabled
    /// semantics.
    #[props(default = false)]
    pub active: bool,
    #[props(default = false)]
    pub disabled: bool,
    /// Accessible name. Required: an icon-only element has no text for
    /// assistive technology to fall back on.
    pub aria_label: String,
    #[props(default)]
    pub class: Option<String>,
    /// Explicit `type` attribute for button-like resolutions.
    #[props(default)]
    pub button_type: Option<String>,
    /// When provided, the icon button renders as an anchor with this
    /// destination.
    #[props(default)]
    pub href: Option<String>,
    /// Caller-supplied renderable. Supersedes the behavior of every other
    /// prop.
    #[props(default)]
    pub component: Option<CustomRenderer>,
    #[props(default)]
    pub onclick: Option<EventHandler<MouseEvent>>,
    #[props(extends = GlobalAttributes, extends = a, extends = button)]
    pub attributes: Vec<Attribute>,
    pub children: Element,
}

/// Icon-only interactive element.
///
/// Focusable at rest (`tabindex="0"`) and skipped by keyboard navigation
/// while disabled, whichever element kind it resolves to.
#[component]
pub fn IconButton(props: IconButtonProps) -> Element {
    let overrides = ElementOverrides {
        component: props.component,
        href: props.href.clone(),
        default_component: None,
    };
    let resolved = resolve(&overrides, ContainerTag::Button);
    let state = compose(&resolved, props.disabled, props.active).with_tab_skip(Some(0));

    let mut class = String::from("icon-button");
    if let Some(extra) = &props.class {
        class.push(' ');
        class.push_str(extra);
    }

    let mut attributes = vec![
        Attribute::new("class", class, None, false),
        Attribute::new("aria-label", props.aria_label, None, false),
        Attribute::new("data-style", props.variant.class(), None, false),
        Attribute::new("data-size", props.size.class(), None, false),
        Attribute::new(
            "data-active",
            if state.active { "true" } else { "false" },
            None,
            false,
        ),
    ];
    attributes.extend(state.attributes());
    if let Some(button_type) = computed_button_type(props.button_type, &resolved) {
        attributes.push(Attribute::new("type", button_type, None, false));
    }
    attributes.extend(merge_props(&props.attributes, RESERVED));

    let content = rsx! {
        span { class: "icon-button-icon", "data-size": props.size.class(),
            {props.children}
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        {render_resolved(resolved, props.href, attributes, props.onclick, content)}
    }
}
