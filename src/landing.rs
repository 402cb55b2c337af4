//! Copy and figures shown on the landing page.

pub struct NavLink {
    pub label: &'static str,
    pub anchor: &'static str,
}

pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub struct Stat {
    /// Final value; the script counts up to it on first view.
    pub target: u32,
    pub unit: &'static str,
    pub label: &'static str,
    pub caption: &'static str,
}

pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
    pub avatar: &'static str,
}

pub enum Price {
    Monthly(&'static str),
    Custom,
}

pub struct Plan {
    pub name: &'static str,
    pub price: Price,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub highlighted: bool,
}

pub struct ContactChannel {
    pub label: &'static str,
    pub value: &'static str,
    pub href: &'static str,
    pub action: &'static str,
}

impl ContactChannel {
    /// Mail and phone links stay in the page, everything else opens a new tab.
    pub fn is_external(&self) -> bool {
        self.href.starts_with("http")
    }
}

pub const SITE_NAME: &str = "NovaTech";
pub const DEFAULT_PLAN: &str = "Basic";

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Home", anchor: "home" },
    NavLink { label: "Features", anchor: "features" },
    NavLink { label: "Stats", anchor: "stats" },
    NavLink { label: "Testimonials", anchor: "testimonials" },
    NavLink { label: "Pricing", anchor: "pricing" },
    NavLink { label: "Contact", anchor: "contact" },
];

pub const TRUSTED_BY: &[&str] = &["TechCorp", "StartupAI", "FutureWorks", "CloudFirst"];

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: "brain",
        title: "AI-Powered Intelligence",
        description: "Advanced machine learning algorithms that learn and adapt to your business needs in real-time.",
    },
    Feature {
        icon: "zap",
        title: "Lightning Fast",
        description: "Process millions of transactions per second with our optimized infrastructure.",
    },
    Feature {
        icon: "lock",
        title: "Enterprise Security",
        description: "Bank-grade encryption and compliance with industry standards to protect your data.",
    },
    Feature {
        icon: "gauge",
        title: "Unlimited Scalability",
        description: "Grow without limits. Our cloud infrastructure scales automatically with your business.",
    },
    Feature {
        icon: "chart",
        title: "Advanced Analytics",
        description: "Real-time dashboards and insights to make data-driven decisions.",
    },
    Feature {
        icon: "users",
        title: "Team Collaboration",
        description: "Built-in tools for seamless communication and workflow management.",
    },
];

pub const STATS: &[Stat] = &[
    Stat {
        target: 500,
        unit: "+",
        label: "Enterprise Clients",
        caption: "clients",
    },
    Stat {
        target: 10_000,
        unit: "+",
        label: "Projects Delivered",
        caption: "projects",
    },
    Stat {
        target: 99,
        unit: "%",
        label: "Satisfaction Rate",
        caption: "satisfied",
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "NovaTech transformed our operations. We saw a 40% increase in productivity within the first month.",
        author: "Sarah Chen",
        role: "CEO, TechCorp Solutions",
        avatar: "👩‍💼",
    },
    Testimonial {
        quote: "The AI integration is seamless and incredibly intuitive. Our team loves it.",
        author: "Michael Rodriguez",
        role: "CTO, StartupAI",
        avatar: "👨‍💼",
    },
    Testimonial {
        quote: "Best investment we made this year. The ROI speaks for itself.",
        author: "Emily Watson",
        role: "CFO, FutureWorks Inc",
        avatar: "👩‍💼",
    },
    Testimonial {
        quote: "Exceptional support and constant innovation. They truly care about their customers.",
        author: "David Kumar",
        role: "Founder, CloudFirst",
        avatar: "👨‍💼",
    },
];

pub const PLANS: &[Plan] = &[
    Plan {
        name: "Basic",
        price: Price::Monthly("$299"),
        description: "Perfect for startups and small teams",
        features: &[
            "Up to 5 users",
            "10GB storage",
            "Basic analytics",
            "Email support",
            "Monthly reports",
        ],
        highlighted: false,
    },
    Plan {
        name: "Pro",
        price: Price::Monthly("$999"),
        description: "Ideal for growing businesses",
        features: &[
            "Unlimited users",
            "1TB storage",
            "Advanced analytics",
            "Priority support",
            "Real-time dashboards",
            "Custom integrations",
            "API access",
        ],
        highlighted: true,
    },
    Plan {
        name: "Enterprise",
        price: Price::Custom,
        description: "For large-scale operations",
        features: &[
            "Unlimited everything",
            "Dedicated support",
            "Custom solutions",
            "SLA guarantee",
            "On-premise option",
            "Advanced security",
            "Compliance support",
        ],
        highlighted: false,
    },
];

pub const CONTACT_CHANNELS: &[ContactChannel] = &[
    ContactChannel {
        label: "Email",
        value: "humzaarain51@gmail.com",
        href: "mailto:humzaarain51@gmail.com",
        action: "Send Email",
    },
    ContactChannel {
        label: "Phone",
        value: "+92 311 3277798",
        href: "tel:+923113277798",
        action: "Call Now",
    },
    ContactChannel {
        label: "Address",
        value: "Ocean Towers",
        href: "https://maps.app.goo.gl/kWw954Yp8bzQ84NM9",
        action: "View Map",
    },
];

/// Prefilled chat, the text is already percent-encoded.
pub const WHATSAPP_HREF: &str =
    "https://api.whatsapp.com/send?phone=+923113277798&text=Hi%20NovaTech%2C%20can%20we%20talk%3F";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_plan_is_offered() {
        assert!(PLANS.iter().any(|plan| plan.name == DEFAULT_PLAN));
    }

    #[test]
    fn test_exactly_one_plan_is_highlighted() {
        let highlighted = PLANS.iter().filter(|plan| plan.highlighted).count();
        assert_eq!(highlighted, 1);
    }

    #[test]
    fn test_only_map_link_is_external() {
        let external = CONTACT_CHANNELS
            .iter()
            .filter(|channel| channel.is_external())
            .map(|channel| channel.label)
            .collect::<Vec<_>>();

        assert_eq!(external, vec!["Address"]);
    }
}
