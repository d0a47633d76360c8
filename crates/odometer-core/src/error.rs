use thiserror::Error;

use crate::pool::CellId;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cell {0} is not in use")]
    Pool(CellId),
}

pub type Result<T> = std::result::Result<T, Error>;
