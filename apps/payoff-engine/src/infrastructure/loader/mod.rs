//! Position file loaders.

mod csv_loader;
mod error;

pub use csv_loader::CsvPositionLoader;
pub use error::LoaderError;
