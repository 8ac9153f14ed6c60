pub mod account;
pub mod constants;
pub mod decimal;
pub mod error;
pub mod traits;
pub mod types;

pub use account::*;
pub use constants::*;
pub use decimal::Decimal;
pub use error::MintError;
pub use traits::*;
pub use types::*;
