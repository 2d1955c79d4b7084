use yew::prelude::*;

use crate::ui::{Typography, Variant};

#[derive(Clone, Copy, PartialEq)]
pub enum ButtonVariant {
    Primary,
    Secondary,
}

impl ButtonVariant {
    fn css_class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "primary",
            ButtonVariant::Secondary => "secondary",
        }
    }
}

#[derive(Clone, PartialEq, Properties)]
pub struct ButtonProps {
    pub label: String,
    #[prop_or_default]
    pub variant: Option<ButtonVariant>,
    #[prop_or_default]
    pub small: bool,
    #[prop_or_default]
    pub outlined: bool,
    #[prop_or_default]
    pub disabled: bool,
    pub onclick: Callback<web_sys::MouseEvent>,
}

#[function_component(Button)]
pub fn button(p: &ButtonProps) -> Html {
    let class = classes!(
        "button-base",
        p.variant.map(ButtonVariant::css_class),
        p.small.then_some("small"),
        p.outlined.then_some("outlined"),
    );
    html! {
        <button {class} disabled={p.disabled} onclick={p.onclick.clone()}>
            <Typography variant={Variant::ButtonText}>{ p.label.clone() }</Typography>
        </button>
    }
}
