mod storage;
pub use storage::{MemoryBackend, StorageBackend, COMMENTS_KEY, REPLIES_KEY};

mod store;
pub use store::CommentStore;

mod util;
pub use util::{format_date_time, sort_by_recency};

pub mod api {
    pub use komento_api::*;
}
