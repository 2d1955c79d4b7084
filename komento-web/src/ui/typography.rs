use yew::prelude::*;

/// Output shape of a piece of text. Callers that leave the prop unset get
/// `H1`, which renders as an `h2` element carrying the `h1` class.
#[derive(Clone, Copy, PartialEq)]
pub enum Variant {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    Subtitle1,
    Subtitle2,
    Body1,
    Body2,
    ButtonText,
    CaptionText,
    OverlineText,
}

impl Variant {
    fn css_class(self) -> &'static str {
        match self {
            Variant::H1 => "h1",
            Variant::H2 => "h2",
            Variant::H3 => "h3",
            Variant::H4 => "h4",
            Variant::H5 => "h5",
            Variant::H6 => "h6",
            Variant::Subtitle1 => "subtitle1",
            Variant::Subtitle2 => "subtitle2",
            Variant::Body1 => "body1",
            Variant::Body2 => "body2",
            Variant::ButtonText => "button-text",
            Variant::CaptionText => "caption-text",
            Variant::OverlineText => "overline-text",
        }
    }
}

#[derive(Clone, PartialEq, Properties)]
pub struct TypographyProps {
    #[prop_or(Variant::H1)]
    pub variant: Variant,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Typography)]
pub fn typography(p: &TypographyProps) -> Html {
    let class = classes!("typography-base", p.variant.css_class(), p.class.clone());
    match p.variant {
        Variant::H1 | Variant::H2 => html! { <h2 {class}>{ p.children.clone() }</h2> },
        Variant::H3 => html! { <h3 {class}>{ p.children.clone() }</h3> },
        Variant::H4 => html! { <h4 {class}>{ p.children.clone() }</h4> },
        Variant::H5 => html! { <h5 {class}>{ p.children.clone() }</h5> },
        Variant::H6 | Variant::Subtitle1 | Variant::Subtitle2 => {
            html! { <h6 {class}>{ p.children.clone() }</h6> }
        }
        Variant::Body1 | Variant::Body2 => html! { <p {class}>{ p.children.clone() }</p> },
        Variant::ButtonText | Variant::CaptionText | Variant::OverlineText => {
            html! { <span {class}>{ p.children.clone() }</span> }
        }
    }
}
