use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Graph(#[from] skein_surface::graph::GraphError),
}

pub type Result<T> = std::result::Result<T, BuildError>;
