pub mod progress;
pub mod sensor;
pub mod simulator;
pub mod ticker;

pub use progress::{step_for_distance, Generation, NavState, ProgressSnapshot, ProgressSource};
pub use sensor::SensorProgress;
pub use simulator::StepSimulator;
pub use ticker::Ticker;
