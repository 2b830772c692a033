mod non_negative;
mod positive;

pub use non_negative::NonNegative;
pub use positive::Positive;
