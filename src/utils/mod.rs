pub mod errors;
pub mod histogram;
pub mod normal;
pub mod ticks;

pub use errors::ChartError;
pub use histogram::Histogram;
pub use normal::standard_normal_cdf;
pub use ticks::{tick_label, TickAxis};
