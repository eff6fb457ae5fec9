mod ledger;
mod person;

pub use ledger::*;
pub use person::*;
