/// Defines a first-order system of `N` ordinary differential equations.
///
/// An ODE problem connects a [`Model`] to a numerical integrator. It extracts
/// the state vector `y` from model input, reads the derivative `dy/dt` from
/// model input and output, and rebuilds model input from an independent
/// variable `t` and a trial state.
///
/// Keeping these mappings on the problem rather than on the model lets one
/// model be integrated in different ways, for example with or without
/// auxiliary state.
///
/// [`Model`]: crate::Model
pub trait OdeProblem<const N: usize> {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Extracts the state vector from model input.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the state cannot be extracted from the input.
    fn state(&self, input: &Self::Input) -> Result<[f64; N], Self::Error>;

    /// Computes the state derivative from model input and output.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the derivative cannot be computed.
    fn derivative(
        &self,
        input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; N], Self::Error>;

    /// Builds model input for the trial point `(t, state)`.
    ///
    /// `base` is the input the integration started from, so any part of the
    /// input that is not integrated carries over unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the input cannot be constructed.
    fn build_input(
        &self,
        base: &Self::Input,
        t: f64,
        state: &[f64; N],
    ) -> Result<Self::Input, Self::Error>;
}
