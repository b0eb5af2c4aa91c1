mod status;
mod terrain;
mod weather;

pub use status::Status;
pub use terrain::Terrain;
pub use weather::Weather;
