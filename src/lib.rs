pub mod data;
pub mod ledger;
