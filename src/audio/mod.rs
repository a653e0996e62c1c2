pub mod audio_engine;
pub mod constants;
pub mod layout;
pub mod pan;
pub mod parameters;
pub mod snapshot;
pub mod transform;
