//! Use cases - flows that span more than one store.

pub mod academy_flow;
pub mod flight_simulation;

pub use academy_flow::{AcademyFlow, AcademyFlowError, Certificate, CERTIFICATE_TITLE};
pub use flight_simulation::{FlightError, FlightOutcome, FlightSimulation};
