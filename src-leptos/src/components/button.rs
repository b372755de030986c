//! Button component with variants and sizes

use leptos::children::ViewFn;
use leptos::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Danger,
    Ghost,
    Outline,
}

impl ButtonVariant {
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn--primary",
            ButtonVariant::Secondary => "btn--secondary",
            ButtonVariant::Danger => "btn--danger",
            ButtonVariant::Ghost => "btn--ghost",
            ButtonVariant::Outline => "btn--outline",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl ButtonSize {
    pub fn class(&self) -> &'static str {
        match self {
            ButtonSize::Small => "btn--sm",
            ButtonSize::Medium => "btn--md",
            ButtonSize::Large => "btn--lg",
        }
    }
}

/// Own classes first, caller classes last so they can override.
pub fn button_class(variant: ButtonVariant, size: ButtonSize, extra: &str) -> String {
    let extra = extra.trim();
    if extra.is_empty() {
        format!("btn {} {}", variant.class(), size.class())
    } else {
        format!("btn {} {} {}", variant.class(), size.class(), extra)
    }
}

/// Styled button. Any other native attribute can be forwarded from the call
/// site with `attr:`, e.g. `attr:aria-label="..."`.
#[component]
pub fn Button(
    /// Button variant
    #[prop(optional)]
    variant: ButtonVariant,
    /// Button size
    #[prop(optional)]
    size: ButtonSize,
    /// Leading icon
    #[prop(optional, into)]
    icon: Option<ViewFn>,
    /// Whether button is disabled
    #[prop(into, default = false.into())]
    disabled: Signal<bool>,
    /// Tooltip
    #[prop(optional, into)]
    title: Option<String>,
    /// Additional CSS class
    #[prop(optional, into)]
    class: String,
    /// Click handler
    #[prop(optional, into)]
    on_click: Option<Callback<()>>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let class = button_class(variant, size, &class);

    view! {
        <button
            type="button"
            class=class
            title=title
            disabled=move || disabled.get()
            on:click=move |_| {
                if let Some(on_click) = on_click {
                    on_click.run(());
                }
            }
        >
            {icon.map(|icon| view! { <span class="btn-icon">{icon.run()}</span> })}
            {children.map(|children| children())}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_class_defaults() {
        assert_eq!(
            button_class(ButtonVariant::default(), ButtonSize::default(), ""),
            "btn btn--primary btn--md"
        );
    }

    #[test]
    fn test_button_class_appends_caller_class() {
        assert_eq!(
            button_class(ButtonVariant::Ghost, ButtonSize::Small, " text-muted "),
            "btn btn--ghost btn--sm text-muted"
        );
        assert_eq!(
            button_class(ButtonVariant::Outline, ButtonSize::Large, "wide"),
            "btn btn--outline btn--lg wide"
        );
    }

    #[test]
    fn test_every_variant_has_distinct_class() {
        let variants = [
            ButtonVariant::Primary,
            ButtonVariant::Secondary,
            ButtonVariant::Danger,
            ButtonVariant::Ghost,
            ButtonVariant::Outline,
        ];
        let mut classes: Vec<_> = variants.iter().map(ButtonVariant::class).collect();
        classes.sort_unstable();
        classes.dedup();
        assert_eq!(classes.len(), variants.len());
    }
}
