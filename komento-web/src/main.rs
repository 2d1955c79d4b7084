use std::rc::Rc;

use komento_client::{api::NodeId, CommentStore};
use yew::prelude::*;

mod storage;
use storage::LocalStorageBackend;

mod ui;
use ui::{Button, ButtonVariant, CommentView, NewComment, Typography, Variant};

fn main() {
    tracing_wasm::set_as_global_default();
    yew::Renderer::<App>::new().render();
}

enum AppMsg {
    AddComment(String),
    AddReply(NodeId, String),
    UpdateText(NodeId, String),
    Delete(NodeId),
    DeleteAll,
}

struct App {
    store: CommentStore<LocalStorageBackend>,
}

impl Component for App {
    type Message = AppMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            store: CommentStore::load(LocalStorageBackend),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        // the widgets validate before emitting, so a validation error here
        // only means the input raced empty and there is nothing to show
        match msg {
            AppMsg::AddComment(text) => {
                let _ = self.store.add_comment(&text);
            }
            AppMsg::AddReply(parent_id, text) => {
                let _ = self.store.add_reply(&parent_id, &text);
            }
            AppMsg::UpdateText(id, text) => {
                let _ = self.store.update_text(&id, &text);
            }
            AppMsg::Delete(id) => self.store.delete(&id),
            AppMsg::DeleteAll => self.store.delete_all(),
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let comments = self.store.comments_by_recency();
        let replies = Rc::new(self.store.replies().clone());
        let on_update = ctx
            .link()
            .callback(|(id, text)| AppMsg::UpdateText(id, text));
        let on_delete = ctx.link().callback(AppMsg::Delete);
        let on_add_reply = ctx
            .link()
            .callback(|(id, text)| AppMsg::AddReply(id, text));

        let list = if comments.is_empty() {
            html! {
                <Typography variant={Variant::CaptionText} class={classes!("no-comments-text")}>
                    { "No comments added" }
                </Typography>
            }
        } else {
            html! {
                <div class="comments-container">
                    <div class="delete-all-container">
                        <Button
                            label="Delete All"
                            variant={ButtonVariant::Secondary}
                            small={true}
                            onclick={ctx.link().callback(|_| AppMsg::DeleteAll)}
                        />
                    </div>
                    <ul>
                        { for comments.iter().map(|comment| html! {
                            <li key={comment.id.0.clone()} class="list-item">
                                <CommentView
                                    id={comment.id.clone()}
                                    text={comment.text.clone()}
                                    created_at={comment.created_at}
                                    reply_ids={comment.reply_ids.clone().unwrap_or_default()}
                                    replies={replies.clone()}
                                    on_update={on_update.clone()}
                                    on_delete={on_delete.clone()}
                                    on_add_reply={on_add_reply.clone()}
                                />
                            </li>
                        }) }
                    </ul>
                </div>
            }
        };

        html! {
            <div class="wrapper">
                <div class="jumbotron">
                    <Typography variant={Variant::H2}>{ "Comment Widget" }</Typography>
                    <div class="main-content">
                        <NewComment on_add_comment={ctx.link().callback(AppMsg::AddComment)} />
                        { list }
                    </div>
                </div>
            </div>
        }
    }
}
