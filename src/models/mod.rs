mod currency;
mod exchange;
pub use currency::*;
pub use exchange::*;
