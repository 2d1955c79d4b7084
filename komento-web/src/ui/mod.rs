mod button;
pub use button::{Button, ButtonVariant};

mod comment;
pub use comment::CommentView;

mod new_comment;
pub use new_comment::NewComment;

mod text_field;
pub use text_field::TextField;

mod typography;
pub use typography::{Typography, Variant};
