use yew::prelude::*;

use crate::ui::{Typography, Variant};

#[derive(Clone, PartialEq, Properties)]
pub struct TextFieldProps {
    #[prop_or_default]
    pub placeholder: String,
    pub value: String,
    #[prop_or_default]
    pub error: bool,
    #[prop_or_default]
    pub error_message: String,
    pub oninput: Callback<web_sys::InputEvent>,
    #[prop_or_default]
    pub onkeyup: Callback<web_sys::KeyboardEvent>,
}

#[function_component(TextField)]
pub fn text_field(p: &TextFieldProps) -> Html {
    let class = classes!("text-field-base", p.error.then_some("error"));
    html! {
        <div class="text-field-wrapper">
            <input
                {class}
                type="text"
                placeholder={p.placeholder.clone()}
                value={p.value.clone()}
                oninput={p.oninput.clone()}
                onkeyup={p.onkeyup.clone()}
            />
            <div class="error-message-container">
                <Typography variant={Variant::CaptionText}>{ p.error_message.clone() }</Typography>
            </div>
        </div>
    }
}
