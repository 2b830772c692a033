/// A callable model that maps a typed input to a typed output.
///
/// Models are expected to be pure: the same input always produces the same
/// output. Solvers rely on this when they re-evaluate a model at trial states
/// that are later rejected.
pub trait Model {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Calls the model with the given input.
    ///
    /// # Errors
    ///
    /// Each model defines its own `Error` type for domain-specific failures.
    /// Models that cannot fail use [`std::convert::Infallible`].
    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error>;
}
