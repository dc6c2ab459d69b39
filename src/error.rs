use thiserror::Error;

#[derive(Error, Debug)]
pub enum GarbError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type Result<T> = std::result::Result<T, GarbError>;
