use dioxus::prelude::*;

use crate::components::container::render_resolved;
use crate::focus::use_focus_visible;
use crate::polymorphic::{
    compose, merge_props, resolve, ContainerTag, CustomRenderer, ElementOverrides,
};

/// Size of a menu item.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum MenuItemSize {
    #[default]
    Default,
    Large,
}

impl MenuItemSize {
    fn class(&self) -> &'static str {
        match self {
            MenuItemSize::Default => "default",
            MenuItemSize::Large => "large",
        }
    }
}

/// Attribute names the menu item derives itself; caller copies are dropped.
const RESERVED: &[&str] = &[
    "class",
    "disabled",
    "aria-disabled",
    "tabindex",
    "href",
    "role",
    "target",
    "rel",
    "data-size",
    "data-active",
    "data-focus-visible",
];

#[derive(Props, Clone, PartialEq)]
pub struct MenuItemProps {
    /// Surfaced as a styling hook (bold title treatment); has no effect on
    /// focus or disabled semantics.
    #[props(default = false)]
    pub active: bool,
    #[props(default = false)]
    pub disabled: bool,
    #[props(default)]
    pub size: MenuItemSize,
    /// Secondary line rendered below the title.
    #[props(default)]
    pub description: Option<Element>,
    /// Icon rendered to the left of the title.
    #[props(default)]
    pub glyph: Option<Element>,
    #[props(default)]
    pub class: Option<String>,
    /// When provided, the item renders as an anchor with this destination.
    #[props(default)]
    pub href: Option<String>,
    /// Caller-supplied renderable for the item root. Supersedes the
    /// behavior of every other prop.
    #[props(default)]
    pub component: Option<CustomRenderer>,
    #[props(default)]
    pub onclick: Option<EventHandler<MouseEvent>>,
    #[props(extends = GlobalAttributes, extends = a)]
    pub attributes: Vec<Attribute>,
    pub children: Element,
}

/// Entry of a menu: an `li role="none"` wrapper around a polymorphic
/// interactive root carrying `role="menuitem"`.
///
/// Reads the keyboard-focus-visibility context to surface a focus-ring
/// styling hook; the context value is owned by the host.
#[component]
pub fn MenuItem(props: MenuItemProps) -> Element {
    let focus_visible = use_focus_visible();

    let overrides = ElementOverrides {
        component: props.component,
        href: props.href.clone(),
        default_component: None,
    };
    let resolved = resolve(&overrides, ContainerTag::Button);
    let state = compose(&resolved, props.disabled, props.active).with_tab_skip(None);

    let mut class = String::from("menu-item");
    if let Some(extra) = &props.class {
        class.push(' ');
        class.push_str(extra);
    }

    let active = if state.active { "true" } else { "false" };
    let disabled = if state.aria_disabled { "true" } else { "false" };
    let focused = if focus_visible { "true" } else { "false" };

    let mut attributes = vec![
        Attribute::new("class", class, None, false),
        Attribute::new("role", "menuitem", None, false),
        Attribute::new("data-size", props.size.class(), None, false),
        Attribute::new("data-active", active, None, false),
        Attribute::new("data-focus-visible", focused, None, false),
    ];
    attributes.extend(state.attributes());
    if resolved.is_link() {
        // Menu links stay in the current browsing context.
        attributes.push(Attribute::new("target", "_self", None, false));
        attributes.push(Attribute::new("rel", "", None, false));
    }
    attributes.extend(merge_props(&props.attributes, RESERVED));

    let glyph = props.glyph.map(|glyph| {
        rsx! {
            span {
                class: "menu-item-glyph",
                "data-active": active,
                "data-focus-visible": focused,
                {glyph}
            }
        }
    });

    let description = props.description.map(|description| {
        rsx! {
            div {
                class: "menu-item-description",
                "data-active": active,
                "data-disabled": disabled,
                "data-focus-visible": focused,
                {description}
            }
        }
    });

    let content = rsx! {
        {glyph}
        div { class: "menu-item-text",
            div {
                class: "menu-item-title",
                "data-active": active,
                "data-disabled": disabled,
                "data-focus-visible": focused,
                {props.children}
            }
            {description}
        }
    };

    let root = render_resolved(resolved, props.href, attributes, props.onclick, content);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        li { role: "none",
            {root}
        }
    }
}
