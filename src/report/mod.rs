mod trace;

pub use trace::DerivationTrace;
