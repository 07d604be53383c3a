pub mod plot;
pub mod progress;
pub mod selection;
