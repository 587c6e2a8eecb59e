use std::cell::RefCell;

use web_sys::UrlSearchParams;

use portfolio_core::PROFILE;

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct SiteConfig {
    pub(crate) contact_email: String,
    pub(crate) debug: bool,
}

thread_local! {
    static SITE_CONFIG: RefCell<Option<SiteConfig>> = RefCell::new(None);
}

pub(crate) fn load_site_config() -> SiteConfig {
    SiteConfig {
        contact_email: contact_email(),
        debug: debug_from_query(),
    }
}

pub(crate) fn set_site_config(config: SiteConfig) {
    SITE_CONFIG.with(|slot| {
        *slot.borrow_mut() = Some(config);
    });
}

pub(crate) fn site_config() -> SiteConfig {
    SITE_CONFIG
        .with(|slot| slot.borrow().clone())
        .unwrap_or_else(load_site_config)
}

pub(crate) fn debug_enabled() -> bool {
    SITE_CONFIG
        .with(|slot| slot.borrow().as_ref().map(|config| config.debug))
        .unwrap_or(false)
}

fn contact_email() -> String {
    if let Some(raw) =
        option_env!("PORTFOLIO_CONTACT_EMAIL").or(option_env!("TRUNK_PUBLIC_CONTACT_EMAIL"))
    {
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }
    PROFILE.email.to_string()
}

fn debug_from_query() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let Ok(search) = window.location().search() else {
        return false;
    };
    let Ok(params) = UrlSearchParams::new_with_str(&search) else {
        return false;
    };
    params
        .get("debug")
        .map(|value| parse_flag(&value))
        .unwrap_or(false)
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "" | "1" | "true" | "yes" | "on"
    )
}
