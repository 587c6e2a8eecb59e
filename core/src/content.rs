#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub role: &'static str,
    pub tagline: &'static str,
    pub location: &'static str,
    pub email: &'static str,
    pub summary: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillGroup {
    pub title: &'static str,
    pub items: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProjectLinks {
    pub live: Option<&'static str>,
    pub code: Option<&'static str>,
    pub gallery: Option<&'static str>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub summary: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub links: ProjectLinks,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Experience {
    pub role: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub highlights: &'static [&'static str],
}

pub const PROFILE: Profile = Profile {
    name: "Alex Morgan",
    role: "Software Engineer",
    tagline: "I build fast, careful software for the web and the systems under it.",
    location: "Lisbon, Portugal",
    email: "hello@alexmorgan.dev",
    summary: &[
        "I have spent the last eight years shipping product features and the \
         infrastructure that keeps them running.",
        "Lately I work mostly in Rust and TypeScript, on anything from WebAssembly \
         front ends to ingestion pipelines.",
    ],
};

pub const SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        title: "Languages",
        items: &["Rust", "TypeScript", "Python", "SQL"],
    },
    SkillGroup {
        title: "Web",
        items: &["WebAssembly", "Yew", "React", "CSS"],
    },
    SkillGroup {
        title: "Infrastructure",
        items: &["PostgreSQL", "Docker", "Kubernetes", "Terraform"],
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Tidepool",
        summary: "Realtime dashboard for coastal sensor data.",
        description: "Streams readings from buoy sensors into a WebAssembly chart view \
                      that stays smooth with a week of history loaded.",
        tags: &["Rust", "WebAssembly", "Data"],
        links: ProjectLinks {
            live: Some("https://tidepool.example.com"),
            code: Some("https://github.com/alexmorgan/tidepool"),
            gallery: None,
        },
    },
    Project {
        title: "Ledgerline",
        summary: "Double-entry bookkeeping API.",
        description: "A small accounting service with an append-only journal and \
                      balance snapshots rebuilt on demand.",
        tags: &["Rust", "API", "PostgreSQL"],
        links: ProjectLinks {
            live: None,
            code: Some("https://github.com/alexmorgan/ledgerline"),
            gallery: None,
        },
    },
    Project {
        title: "Field Notes",
        summary: "Photo journal from a year of trail running.",
        description: "A static photo site generated from EXIF metadata, with maps \
                      built at compile time.",
        tags: &["Design", "Static Site"],
        links: ProjectLinks {
            live: Some("https://fieldnotes.example.com"),
            code: Some("https://github.com/alexmorgan/field-notes"),
            gallery: Some("https://fieldnotes.example.com/gallery"),
        },
    },
    Project {
        title: "Shelf",
        summary: "Reading tracker with offline sync.",
        description: "Keeps a reading list in the browser and syncs changes when the \
                      device comes back online.",
        tags: &["TypeScript", "WebAssembly", "Design"],
        links: ProjectLinks {
            live: Some("https://shelf.example.com"),
            code: None,
            gallery: None,
        },
    },
];

pub const EXPERIENCE: &[Experience] = &[
    Experience {
        role: "Senior Software Engineer",
        company: "Northwind Labs",
        period: "2021 - Present",
        highlights: &[
            "Moved the analytics front end to Rust and WebAssembly.",
            "Led the on-call rotation for the ingestion platform.",
        ],
    },
    Experience {
        role: "Software Engineer",
        company: "Brightline",
        period: "2017 - 2021",
        highlights: &[
            "Built the billing service and its reconciliation jobs.",
            "Mentored four engineers through their first year.",
        ],
    },
];
