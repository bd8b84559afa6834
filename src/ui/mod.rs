//! Terminal UI components.

mod progress;
mod spinner;
mod style;

pub use progress::WithSpinner;
pub use spinner::Spinner;
pub use style::Style;
