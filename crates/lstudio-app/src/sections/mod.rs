//! Built-in section kinds
//!
//! Each submodule declares one section type: its fields, their defaults and
//! its live layout. The parent editor looks kinds up by `Section::kind`.

pub mod contact;
pub mod governance;
pub mod hero;
pub mod partnership;
pub mod services;
pub mod stats;
pub mod sustainability;
pub mod why_choose_us;

use lstudio_core::Registry;

/// Registry with every built-in section kind, in "add section" order.
pub fn builtin_registry() -> Registry {
    let mut registry = Registry::new();
    registry.register(hero::kind());
    registry.register(services::kind());
    registry.register(stats::kind());
    registry.register(partnership::kind());
    registry.register(sustainability::kind());
    registry.register(governance::kind());
    registry.register(contact::kind());
    registry.register(why_choose_us::kind());
    registry
}
