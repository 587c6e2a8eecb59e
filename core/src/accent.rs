use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccentPreset {
    pub name: &'static str,
    pub value: &'static str,
}

pub const ACCENT_PALETTE: &[AccentPreset] = &[
    AccentPreset {
        name: "Violet",
        value: "#7c5cff",
    },
    AccentPreset {
        name: "Cyan",
        value: "#22d3ee",
    },
    AccentPreset {
        name: "Emerald",
        value: "#10b981",
    },
    AccentPreset {
        name: "Amber",
        value: "#f59e0b",
    },
    AccentPreset {
        name: "Rose",
        value: "#f43f5e",
    },
    AccentPreset {
        name: "Sky",
        value: "#3b82f6",
    },
];

// Unknown stored values pass through unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Accent(String);

impl Accent {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn preset(&self) -> Option<&'static AccentPreset> {
        ACCENT_PALETTE.iter().find(|preset| preset.value == self.0)
    }
}

impl Default for Accent {
    fn default() -> Self {
        Self::from(&ACCENT_PALETTE[0])
    }
}

impl From<&AccentPreset> for Accent {
    fn from(preset: &AccentPreset) -> Self {
        Self(preset.value.to_string())
    }
}

impl fmt::Display for Accent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
