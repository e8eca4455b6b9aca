mod core;
mod bitrev;
mod family;
mod set;
mod sine;
mod sizes;
mod twiddle;

pub use bitrev::{BitReversal, apply_bitrev};
pub use family::{TableFamily, build_family};
pub use set::{GeneratorConfig, TableSet};
pub use sine::Sine;
pub use sizes::{SizeSequence, Sizes};
pub use twiddle::Twiddle;
