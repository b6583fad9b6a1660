use serde::Serialize;

/// UI navigation category for the type catalog.
#[derive(Debug, Clone, Serialize)]
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    #[serde(skip)]
    pub order: u8,
}

/// All catalog categories. `order` drives presentation, not declaration.
pub const CATEGORIES: &[Category] = &[
    Category {
        id: "identifiers_security",
        name: "Identifiers & Security",
        icon: "🔑",
        order: 1,
    },
    Category {
        id: "contact_identity",
        name: "Contact & Identity",
        icon: "📞",
        order: 2,
    },
    Category {
        id: "financial_sensitive",
        name: "Financial & Sensitive",
        icon: "💳",
        order: 3,
    },
    Category {
        id: "network_web",
        name: "Network & Web",
        icon: "🌐",
        order: 4,
    },
    Category {
        id: "time_text",
        name: "Time & Text",
        icon: "🕐",
        order: 5,
    },
    Category {
        id: "colors",
        name: "Colors",
        icon: "🎨",
        order: 6,
    },
    Category {
        id: "work_org",
        name: "Work & Organization",
        icon: "🏢",
        order: 7,
    },
];

/// Looks up a category by id.
pub fn category(id: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|category| category.id == id)
}
