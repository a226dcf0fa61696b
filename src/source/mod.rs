//! Migration sources and the templating decorator over them.
mod driver;
pub use driver::{ContentStream, Driver};

mod template;
pub use template::{Parameters, Template};

mod templater;
pub use templater::Templater;
