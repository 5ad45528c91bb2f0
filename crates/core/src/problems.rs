mod exact;
mod fallible;
mod ode;

pub use exact::ExactSolution;
pub use fallible::Fallible;
pub use ode::OdeProblem;
