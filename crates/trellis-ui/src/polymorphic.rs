//! Polymorphic element resolution shared by every interactive primitive.
//!
//! Each primitive accepts a bag of inputs that may point at several different
//! underlying elements at once: a caller-supplied renderable, a link
//! destination, or nothing at all. This module classifies that bag into
//! exactly one [`ResolvedElement`] and derives the accessibility attributes
//! that follow from the classification, so `<button>`, `<a>`, and custom
//! renderables all behave the same way for assistive technology and
//! keyboard users.

use dioxus::prelude::*;

/// Markup tags a polymorphic component may fall back to when neither a
/// custom renderable nor a link destination is supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContainerTag {
    #[default]
    Div,
    Span,
    Button,
    Li,
}

/// Composed output handed to a caller-supplied renderable: the final
/// attribute set and the children the component would otherwise render
/// itself.
#[derive(Clone)]
pub struct RenderSpec {
    pub attributes: Vec<Attribute>,
    pub children: Element,
}

/// A caller-supplied renderable. Receives the composed [`RenderSpec`] and
/// returns the element tree to render in place of the built-in markup.
pub type CustomRenderer = Callback<RenderSpec, Element>;

/// Discriminating inputs that select which element backs a component for
/// one render.
#[derive(Clone, PartialEq, Default)]
pub struct ElementOverrides {
    /// Caller-supplied renderable. Supersedes every other input.
    pub component: Option<CustomRenderer>,
    /// Link destination. An empty string counts as unset.
    pub href: Option<String>,
    /// Caller override for the fallback tag.
    pub default_component: Option<ContainerTag>,
}

/// The concrete element chosen to back a polymorphic component.
///
/// Exactly one variant is produced per call to [`resolve`]; conflicting
/// inputs are settled by precedence, never rejected.
#[derive(Clone, PartialEq)]
pub enum ResolvedElement {
    /// A caller-supplied renderable.
    Custom(CustomRenderer),
    /// An anchor tag carrying the caller's `href`.
    Link,
    /// The component's fallback tag.
    Fallback(ContainerTag),
}

impl ResolvedElement {
    /// Whether this resolution is an anchor. Anchors never take the native
    /// `disabled` attribute.
    pub fn is_link(&self) -> bool {
        matches!(self, ResolvedElement::Link)
    }
}

/// Classify a set of overrides into the element that will back the
/// component.
///
/// Precedence: a caller-supplied `component` wins outright, even when an
/// `href` is also present; a non-empty `href` selects an anchor; everything
/// else lands on the fallback tag. An empty `href` is an unset destination,
/// not a link.
pub fn resolve(overrides: &ElementOverrides, default_tag: ContainerTag) -> ResolvedElement {
    if let Some(component) = &overrides.component {
        return ResolvedElement::Custom(component.clone());
    }

    match overrides.href.as_deref() {
        Some(href) if !href.is_empty() => ResolvedElement::Link,
        _ => ResolvedElement::Fallback(overrides.default_component.unwrap_or(default_tag)),
    }
}

/// Accessibility attributes derived from the resolved element and the
/// component's semantic flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AccessibleState {
    /// Native `disabled` attribute. Held back on anchors, where it has no
    /// meaning.
    pub native_disabled: bool,
    /// `aria-disabled`, always mirroring the `disabled` flag so every
    /// element kind reports the same disabled intent.
    pub aria_disabled: bool,
    /// Explicit `tabindex`, when a specialization opts into one.
    pub tab_index: Option<i64>,
    /// Styling hook only. Never feeds back into the fields above.
    pub active: bool,
}

/// Derive the accessible state for a resolved element.
///
/// Total over all inputs; `disabled` and `active` may both be set, and the
/// styling layer decides which one shows.
pub fn compose(resolved: &ResolvedElement, disabled: bool, active: bool) -> AccessibleState {
    AccessibleState {
        native_disabled: disabled && !resolved.is_link(),
        aria_disabled: disabled,
        tab_index: None,
        active,
    }
}

impl AccessibleState {
    /// Opt into keyboard-skip semantics: `tabindex="-1"` while disabled so
    /// tab order passes over the element, `rest` otherwise.
    pub fn with_tab_skip(mut self, rest: Option<i64>) -> Self {
        self.tab_index = if self.aria_disabled { Some(-1) } else { rest };
        self
    }

    /// Render the state to its DOM attribute list.
    pub fn attributes(&self) -> Vec<Attribute> {
        let mut attrs = vec![Attribute::new(
            "aria-disabled",
            if self.aria_disabled { "true" } else { "false" },
            None,
            false,
        )];
        if self.native_disabled {
            attrs.push(Attribute::new("disabled", "true", None, false));
        }
        if let Some(tab_index) = self.tab_index {
            attrs.push(Attribute::new("tabindex", tab_index.to_string(), None, false));
        }
        attrs
    }
}

/// Pass-through filter: a new attribute list without any attribute whose
/// name the component reserves for itself.
///
/// Order and values of the remaining attributes are untouched, and the
/// clone is shallow, so handler and value identity survive for consumers
/// that rely on it.
pub fn merge_props(attrs: &[Attribute], reserved: &[&str]) -> Vec<Attribute> {
    attrs
        .iter()
        .filter(|attr| !reserved.contains(&attr.name))
        .cloned()
        .collect()
}
