use dioxus::prelude::*;

use crate::components::container::{computed_button_type, render_resolved};
use crate::polymorphic::{
    compose, merge_props, resolve, ContainerTag, CustomRenderer, ElementOverrides,
};

/// Visual variant for buttons.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ButtonVariant {
    #[default]
    Default,
    Primary,
    Info,
    Danger,
    Dark,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Default => "default",
            ButtonVariant::Primary => "primary",
            ButtonVariant::Info => "info",
            ButtonVariant::Danger => "danger",
            ButtonVariant::Dark => "dark",
        }
    }
}

/// Size of a button.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ButtonSize {
    XSmall,
    Small,
    #[default]
    Normal,
    Large,
}

impl ButtonSize {
    fn class(&self) -> &'static str {
        match self {
            ButtonSize::XSmall => "xsmall",
            ButtonSize::Small => "small",
            ButtonSize::Normal => "normal",
            ButtonSize::Large => "large",
        }
    }
}

/// Attribute names the button derives itself; caller copies are dropped.
const RESERVED: &[&str] = &[
    "class",
    "disabled",
    "aria-disabled",
    "tabindex",
    "type",
    "href",
    "data-style",
    "data-size",
];

#[derive(Props, Clone, PartialEq)]
pub struct ButtonProps {
    #[props(default)]
    pub variant: ButtonVariant,
    #[props(default)]
    pub size: ButtonSize,
    #[props(default = false)]
    pub disabled: bool,
    /// Icon rendered to the left of the label.
    #[props(default)]
    pub glyph: Option<Element>,
    /// Extra class merged after the base button class.
    #[props(default)]
    pub class: Option<String>,
    /// Explicit `type` attribute. Defaults to `"button"` on fallback
    /// resolutions so a button inside a form does not submit it.
    #[props(default)]
    pub button_type: Option<String>,
    /// When provided, the button renders as an anchor with this destination.
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

/// Action button that may render as a `button`, an anchor, or a
/// caller-supplied renderable, with identical disabled semantics across the
/// three.
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let overrides = ElementOverrides {
        component: props.component,
        href: props.href.clone(),
        default_component: None,
    };
    let resolved = resolve(&overrides, ContainerTag::Button);
    let state = compose(&resolved, props.disabled, false);

    let mut class = String::from("button");
    if let Some(extra) = &props.class {
        class.push(' ');
        class.push_str(extra);
    }

    let mut attributes = vec![
        Attribute::new("class", class, None, false),
        Attribute::new("data-style", props.variant.class(), None, false),
        Attribute::new("data-size", props.size.class(), None, false),
    ];
    attributes.extend(state.attributes());
    if let Some(button_type) = computed_button_type(props.button_type, &resolved) {
        attributes.push(Attribute::new("type", button_type, None, false));
    }
    attributes.extend(merge_props(&props.attributes, RESERVED));

    let glyph = props.glyph.map(|glyph| {
        rsx! {
            span { class: "button-glyph", "data-size": props.size.class(), {glyph} }
        }
    });

    let content = rsx! {
        span { class: "button-content",
            {glyph}
            {props.children}
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        {render_resolved(resolved, props.href, attributes, props.onclick, content)}
    }
}
