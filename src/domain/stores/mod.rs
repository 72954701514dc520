pub mod click_ledger;
pub mod link_registry;

pub use click_ledger::ClickLedger;
pub use link_registry::LinkRegistry;

#[cfg(test)]
pub use click_ledger::MockClickLedger;
#[cfg(test)]
pub use link_registry::MockLinkRegistry;
