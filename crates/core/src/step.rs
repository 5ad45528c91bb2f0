/// A state that one forward Euler step can advance.
///
/// Given the slope of the state and a step size, [`StepIntegrable::step`]
/// returns `state + derivative * delta`. The Euler solver only ever steps over
/// time, so it asks for `StepIntegrable<f64>`; plain `f64` states get that for
/// free, and newtypes can pick a distinct derivative type.
pub trait StepIntegrable<Delta> {
    /// Rate of change of the state per unit of `Delta`.
    type Derivative;

    /// Advances the state by `derivative * delta`.
    #[must_use]
    fn step(&self, derivative: Self::Derivative, delta: Delta) -> Self;
}

/// Shorthand for `<T as StepIntegrable<Delta>>::Derivative`.
pub type DerivativeOf<T, Delta> = <T as StepIntegrable<Delta>>::Derivative;

impl StepIntegrable<f64> for f64 {
    type Derivative = f64;

    fn step(&self, derivative: f64, delta: f64) -> Self {
        self + derivative * delta
    }
}
