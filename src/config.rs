//! Application-level configuration constants.

use log::LevelFilter;

// Logging
pub const LOG_LEVEL: LevelFilter = LevelFilter::Info;

// Progress animation
pub const PROGRESS_START_DELAY_MS: u32 = 500;
pub const PROGRESS_REPAINT_DELAY_MS: u32 = 300;

// Default values for calculator fields
pub const DEFAULT_TOTAL_COST: &str = "3000";
pub const DEFAULT_PEOPLE: &str = "4";
pub const DEFAULT_EXTRA_COST: &str = "0";

// Pages
pub const PAGE_HOME: &str = "index.html";
pub const PAGE_DESTINATIONS: &str = "destinos.html";
pub const PAGE_PLANNING: &str = "planejamento.html";
pub const PAGE_CONTACT: &str = "contato.html";

/// Navigation bar entries: (href, label)
pub const NAV_LINKS: &[(&str, &str)] = &[
    (PAGE_HOME, "Início"),
    (PAGE_DESTINATIONS, "Destinos"),
    (PAGE_PLANNING, "Planejamento"),
    (PAGE_CONTACT, "Contato"),
];
