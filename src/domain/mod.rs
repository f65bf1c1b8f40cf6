mod dates;
mod entry;
mod interest;
mod ledger;
mod money;
mod rate;

pub use dates::*;
pub use entry::*;
pub use interest::*;
pub use ledger::*;
pub use money::*;
pub use rate::*;
