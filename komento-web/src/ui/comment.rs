use std::collections::HashMap;
use std::rc::Rc;

use komento_client::api::{validate_text, NodeId, Reply, Time};
use komento_client::format_date_time;
use yew::prelude::*;

use crate::ui::{Button, ButtonVariant, TextField, Typography, Variant};

/// One node of the tree, comment or reply alike: both render the same way
/// and recurse into their children through the shared replies mapping.
#[derive(Clone, PartialEq, Properties)]
pub struct CommentViewProps {
    pub id: NodeId,
    pub text: String,
    pub created_at: Time,
    #[prop_or_default]
    pub reply_ids: Vec<NodeId>,
    pub replies: Rc<HashMap<NodeId, Reply>>,
    pub on_update: Callback<(NodeId, String)>,
    pub on_delete: Callback<NodeId>,
    pub on_add_reply: Callback<(NodeId, String)>,
}

pub struct CommentView {
    editing: bool,
    show_input: bool,
    input: String,
    error: bool,
    error_message: String,
}

pub enum CommentViewMsg {
    EditClicked,
    DeleteClicked,
    ReplyClicked,
    InputChanged(String),
    Save,
    Cancel,
}

impl CommentView {
    fn reset(&mut self) {
        self.editing = false;
        self.show_input = false;
        self.input.clear();
        self.error = false;
        self.error_message.clear();
    }
}

impl Component for CommentView {
    type Message = CommentViewMsg;
    type Properties = CommentViewProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            editing: false,
            show_input: false,
            input: String::new(),
            error: false,
            error_message: String::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            CommentViewMsg::EditClicked => {
                self.editing = true;
                self.show_input = true;
                self.input = ctx.props().text.clone();
            }
            CommentViewMsg::DeleteClicked => {
                ctx.props().on_delete.emit(ctx.props().id.clone());
            }
            CommentViewMsg::ReplyClicked => {
                self.editing = false;
                self.show_input = true;
            }
            CommentViewMsg::InputChanged(value) => {
                if self.error && !value.is_empty() {
                    self.error = false;
                    self.error_message.clear();
                }
                self.input = value;
            }
            CommentViewMsg::Save => match validate_text(&self.input) {
                Ok(text) => {
                    let p = ctx.props();
                    if self.editing {
                        p.on_update.emit((p.id.clone(), text.to_string()));
                    } else {
                        p.on_add_reply.emit((p.id.clone(), text.to_string()));
                    }
                    self.reset();
                }
                Err(_) => {
                    self.error = true;
                    self.error_message = String::from("Please type your reply first");
                }
            },
            CommentViewMsg::Cancel => self.reset(),
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let p = ctx.props();
        let link = ctx.link();

        // all three actions lock while the edit/reply row is open
        let actions_disabled = self.show_input;

        let input_row = self.show_input.then(|| {
            let oninput = link.callback(|e: web_sys::InputEvent| {
                let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                CommentViewMsg::InputChanged(input.value())
            });
            let onkeyup = link.batch_callback(|e: web_sys::KeyboardEvent| {
                (e.key() == "Enter").then_some(CommentViewMsg::Save)
            });
            // TODO: focus the input when the row opens; the autofocus
            // attribute only fires on initial document parse
            html! {
                <div>
                    <div class="text-field-container">
                        <TextField
                            placeholder="Enter your reply"
                            value={self.input.clone()}
                            error={self.error}
                            error_message={self.error_message.clone()}
                            {oninput}
                            {onkeyup}
                        />
                    </div>
                    <div class="actions-container">
                        <Button
                            label="Save"
                            variant={ButtonVariant::Primary}
                            small={true}
                            onclick={link.callback(|_| CommentViewMsg::Save)}
                        />
                        <Button
                            label="Cancel"
                            variant={ButtonVariant::Secondary}
                            small={true}
                            outlined={true}
                            onclick={link.callback(|_| CommentViewMsg::Cancel)}
                        />
                    </div>
                </div>
            }
        });

        // a dangling id means the mappings went inconsistent; skip it here
        // and leave the logging to the mutation path
        let children = (!p.reply_ids.is_empty()).then(|| {
            html! {
                <ul>
                    { for p.reply_ids.iter().filter_map(|id| {
                        p.replies.get(id).map(|reply| html! {
                            <li key={reply.id.0.clone()} class="list-item">
                                <CommentView
                                    id={reply.id.clone()}
                                    text={reply.text.clone()}
                                    created_at={reply.created_at}
                                    reply_ids={reply.reply_ids.clone().unwrap_or_default()}
                                    replies={p.replies.clone()}
                                    on_update={p.on_update.clone()}
                                    on_delete={p.on_delete.clone()}
                                    on_add_reply={p.on_add_reply.clone()}
                                />
                            </li>
                        })
                    }) }
                </ul>
            }
        });

        html! {
            <div class="comment">
                <div class="flex-wrap">
                    <div class="text-content">
                        <Typography variant={Variant::Body2}>{ p.text.clone() }</Typography>
                        <Typography variant={Variant::CaptionText} class={classes!("date-text")}>
                            { format_date_time(&p.created_at.with_timezone(&chrono::Local)) }
                        </Typography>
                    </div>
                    <div class="actions-container">
                        <Button
                            label="Edit"
                            small={true}
                            outlined={true}
                            disabled={actions_disabled}
                            onclick={link.callback(|_| CommentViewMsg::EditClicked)}
                        />
                        <Button
                            label="Delete"
                            variant={ButtonVariant::Secondary}
                            small={true}
                            outlined={true}
                            disabled={actions_disabled}
                            onclick={link.callback(|_| CommentViewMsg::DeleteClicked)}
                        />
                        <Button
                            label="Reply"
                            variant={ButtonVariant::Primary}
                            small={true}
                            outlined={true}
                            disabled={actions_disabled}
                            onclick={link.callback(|_| CommentViewMsg::ReplyClicked)}
                        />
                    </div>
                </div>
                { for input_row }
                { for children }
            </div>
        }
    }
}
