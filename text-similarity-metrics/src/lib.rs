pub mod calculators;
pub mod ngram;
pub mod suite;
pub mod timing;

pub use calculators::*;
pub use suite::*;
pub use timing::*;
