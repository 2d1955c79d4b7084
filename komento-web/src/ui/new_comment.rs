use komento_client::api::validate_text;
use yew::prelude::*;

use crate::ui::{Button, ButtonVariant, TextField};

#[derive(Clone, PartialEq, Properties)]
pub struct NewCommentProps {
    pub on_add_comment: Callback<String>,
}

pub struct NewComment {
    value: String,
    error: bool,
    error_message: String,
}

pub enum NewCommentMsg {
    ValueChanged(String),
    Submit,
}

impl Component for NewComment {
    type Message = NewCommentMsg;
    type Properties = NewCommentProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            value: String::new(),
            error: false,
            error_message: String::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            NewCommentMsg::ValueChanged(value) => {
                if self.error && !value.is_empty() {
                    self.error = false;
                    self.error_message.clear();
                }
                self.value = value;
            }
            NewCommentMsg::Submit => match validate_text(&self.value) {
                Ok(text) => {
                    ctx.props().on_add_comment.emit(text.to_string());
                    self.value.clear();
                }
                Err(_) => {
                    self.error = true;
                    self.error_message = String::from("Please type your comment first");
                }
            },
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let oninput = ctx.link().callback(|e: web_sys::InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            NewCommentMsg::ValueChanged(input.value())
        });
        let onkeyup = ctx.link().batch_callback(|e: web_sys::KeyboardEvent| {
            (e.key() == "Enter").then_some(NewCommentMsg::Submit)
        });
        html! {
            <div class="new-comment">
                <TextField
                    placeholder="Enter a comment"
                    value={self.value.clone()}
                    error={self.error}
                    error_message={self.error_message.clone()}
                    {oninput}
                    {onkeyup}
                />
                <Button
                    label="Add Comment"
                    variant={ButtonVariant::Primary}
                    onclick={ctx.link().callback(|_| NewCommentMsg::Submit)}
                />
            </div>
        }
    }
}
