use axum::response::IntoResponse;

use crate::landing::{self, ContactChannel, Feature, NavLink, Plan, Price, Stat, Testimonial};
use crate::template;

#[derive(askama::Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub site_name: &'static str,
    pub nav_links: &'static [NavLink],
    pub trusted_by: &'static [&'static str],
    pub features: &'static [Feature],
    pub stats: &'static [Stat],
    pub testimonials: &'static [Testimonial],
    pub plans: &'static [Plan],
    pub default_plan: &'static str,
    pub contact_channels: &'static [ContactChannel],
    pub whatsapp_href: &'static str,
}

impl Default for IndexTemplate {
    fn default() -> Self {
        Self {
            site_name: landing::SITE_NAME,
            nav_links: landing::NAV_LINKS,
            trusted_by: landing::TRUSTED_BY,
            features: landing::FEATURES,
            stats: landing::STATS,
            testimonials: landing::TESTIMONIALS,
            plans: landing::PLANS,
            default_plan: landing::DEFAULT_PLAN,
            contact_channels: landing::CONTACT_CHANNELS,
            whatsapp_href: landing::WHATSAPP_HREF,
        }
    }
}

/// GET /
pub async fn page() -> impl IntoResponse {
    template::render(IndexTemplate::default())
}
