pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid diagram JSON: {0}")]
    ImportJson(#[from] serde_json::Error),

    #[error("Unknown theme: {name}")]
    UnknownTheme { name: String },
}
