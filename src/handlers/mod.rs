mod exchange;
pub use exchange::*;
