use dioxus::prelude::*;

use crate::polymorphic::{
    merge_props, resolve, ContainerTag, CustomRenderer, ElementOverrides, RenderSpec,
    ResolvedElement,
};

/// Attribute names the container derives itself; caller copies are dropped.
const RESERVED: &[&str] = &["href"];

#[derive(Props, Clone, PartialEq)]
pub struct ContainerProps {
    /// Caller-supplied renderable. Supersedes the behavior of every other
    /// prop.
    #[props(default)]
    pub component: Option<CustomRenderer>,
    /// When provided, the container renders an anchor with this destination.
    #[props(default)]
    pub href: Option<String>,
    /// Fallback tag to use when neither `component` nor `href` applies.
    #[props(default)]
    pub default_component: Option<ContainerTag>,
    #[props(default)]
    pub onclick: Option<EventHandler<MouseEvent>>,
    #[props(extends = GlobalAttributes, extends = a)]
    pub attributes: Vec<Attribute>,
    pub children: Element,
}

/// Generic polymorphic container.
///
/// Resolves to a caller-supplied renderable, an anchor, or a plain fallback
/// tag (a `div` unless overridden), then forwards every non-reserved
/// attribute to whichever element won.
#[component]
pub fn Container(props: ContainerProps) -> Element {
    let overrides = ElementOverrides {
        component: props.component,
        href: props.href.clone(),
        default_component: props.default_component,
    };
    let resolved = resolve(&overrides, ContainerTag::Div);
    let attributes = merge_props(&props.attributes, RESERVED);

    render_resolved(resolved, props.href, attributes, props.onclick, props.children)
}

/// `type` attribute for button-like resolutions: an explicit caller value
/// wins, fallback buttons default to `"button"`, custom renderables only
/// get a type they asked for, and anchors never take one.
pub(crate) fn computed_button_type(
    explicit: Option<String>,
    resolved: &ResolvedElement,
) -> Option<String> {
    match resolved {
        ResolvedElement::Link => None,
        ResolvedElement::Custom(_) => explicit,
        ResolvedElement::Fallback(_) => Some(explicit.unwrap_or_else(|| "button".to_string())),
    }
}

/// Hand composed output to the rendering layer: invoke the custom
/// renderable, or instantiate the anchor / fallback markup.
pub(crate) fn render_resolved(
    resolved: ResolvedElement,
    href: Option<String>,
    attributes: Vec<Attribute>,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    match resolved {
        ResolvedElement::Custom(renderer) => {
            let mut attributes = attributes;
            if let Some(href) = href {
                // The href lost the link-intent contest; it travels on as a
                // plain pass-through attribute.
                attributes.push(Attribute::new("href", href, None, false));
            }
            renderer.call(RenderSpec { attributes, children })
        }
        ResolvedElement::Link => rsx! {
            a {
                href: href,
                onclick: move |evt| {
                    if let Some(handler) = &onclick {
                        handler.call(evt);
                    }
                },
                ..attributes,
                {children}
            }
        },
        ResolvedElement::Fallback(ContainerTag::Div) => rsx! {
            div {
                onclick: move |evt| {
                    if let Some(handler) = &onclick {
                        handler.call(evt);
                    }
                },
                ..attributes,
                {children}
            }
        },
        ResolvedElement::Fallback(ContainerTag::Span) => rsx! {
            span {
                onclick: move |evt| {
                    if let Some(handler) = &onclick {
                        handler.call(evt);
                    }
                },
                ..attributes,
                {children}
            }
        },
        ResolvedElement::Fallback(ContainerTag::Button) => rsx! {
            button {
                onclick: move |evt| {
                    if let Some(handler) = &onclick {
                        handler.call(evt);
                    }
                },
                ..attributes,
                {children}
            }
        },
        ResolvedElement::Fallback(ContainerTag::Li) => rsx! {
            li {
                onclick: move |evt| {
                    if let Some(handler) = &onclick {
                        handler.call(evt);
                    }
                },
                ..attributes,
                {children}
            }
        },
    }
}
