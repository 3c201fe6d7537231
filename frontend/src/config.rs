use log::Level;

pub const BRAND_NAME: &str = "RR TECH";
pub const CONTACT_EMAIL: &str = "rrgroupoftechnologies@gmail.com";

pub const SECTION_HOME: &str = "home";
pub const SECTION_SERVICES: &str = "services";
pub const SECTION_ABOUT: &str = "about";
pub const SECTION_CONTACT: &str = "contact";

/// Every anchor rendered on the page, top to bottom.
#[cfg(test)]
pub const SECTIONS: [&str; 4] = [SECTION_HOME, SECTION_SERVICES, SECTION_ABOUT, SECTION_CONTACT];

// Vertical offset (px) past which the navbar switches to its solid style.
pub const SCROLL_THRESHOLD: f64 = 20.0;

pub const TICK_INTERVAL_MS: u32 = 50;

pub const BACKGROUND_DOTS: usize = 20;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub name: &'static str,
    pub section: &'static str,
}

pub const NAV_ITEMS: [NavItem; 4] = [
    NavItem { name: "Home", section: SECTION_HOME },
    NavItem { name: "Services", section: SECTION_SERVICES },
    NavItem { name: "About", section: SECTION_ABOUT },
    NavItem { name: "Contact", section: SECTION_CONTACT },
];

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Warn
}
