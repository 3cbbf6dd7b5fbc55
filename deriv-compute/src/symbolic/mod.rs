pub mod derivative;

pub use derivative::derivative;
