pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("stanza has no visualizable tokens")]
    EmptyStanza,

    #[error("stanza has no token with HEAD 0")]
    NoRoot,

    #[error("stanza has {count} tokens with HEAD 0, expected exactly one")]
    MultipleRoots { count: usize },

    #[error("token {id} has invalid HEAD {head:?}")]
    InvalidHead { id: String, head: String },

    #[error("token {id} points to nonexistent head {head}")]
    DanglingHead { id: String, head: String },

    #[error("token {id} is its own head")]
    SelfHead { id: String },

    #[error("head links do not connect every token to the root")]
    InconsistentTree,
}
