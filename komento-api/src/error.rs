#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("text is empty or whitespace-only")]
    EmptyText,
}
