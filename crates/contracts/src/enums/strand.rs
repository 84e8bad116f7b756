use std::cmp::Ordering;

/// Known strands, in preferred display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strand {
    ReadingLiterary,
    ReadingInformational,
    ReadingFoundational,
    Writing,
    SpeakingAndListening,
    Language,
}

/// Display colors for a strand's group header and cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrandTheme {
    pub accent: &'static str,
    pub background: &'static str,
    pub border: &'static str,
    pub text: &'static str,
}

/// Theme for strands outside the known set.
pub const NEUTRAL_THEME: StrandTheme = StrandTheme {
    accent: "#64748b",
    background: "#f8fafc",
    border: "#cbd5e1",
    text: "#334155",
};

impl Strand {
    /// Name as it appears in the data file.
    pub fn display_name(&self) -> &'static str {
        match self {
            Strand::ReadingLiterary => "Reading Literary",
            Strand::ReadingInformational => "Reading Informational",
            Strand::ReadingFoundational => "Reading Foundational",
            Strand::Writing => "Writing",
            Strand::SpeakingAndListening => "Speaking and Listening",
            Strand::Language => "Language",
        }
    }

    pub fn theme(&self) -> StrandTheme {
        match self {
            Strand::ReadingLiterary => StrandTheme {
                accent: "#2563eb",
                background: "#eff6ff",
                border: "#bfdbfe",
                text: "#1e3a8a",
            },
            Strand::ReadingInformational => StrandTheme {
                accent: "#059669",
                background: "#ecfdf5",
                border: "#a7f3d0",
                text: "#064e3b",
            },
            Strand::ReadingFoundational => StrandTheme {
                accent: "#0891b2",
                background: "#ecfeff",
                border: "#a5f3fc",
                text: "#164e63",
            },
            Strand::Writing => StrandTheme {
                accent: "#7c3aed",
                background: "#f5f3ff",
                border: "#ddd6fe",
                text: "#4c1d95",
            },
            Strand::SpeakingAndListening => StrandTheme {
                accent: "#d97706",
                background: "#fffbeb",
                border: "#fde68a",
                text: "#78350f",
            },
            Strand::Language => StrandTheme {
                accent: "#e11d48",
                background: "#fff1f2",
                border: "#fecdd3",
                text: "#881337",
            },
        }
    }

    pub fn all() -> [Strand; 6] {
        [
            Strand::ReadingLiterary,
            Strand::ReadingInformational,
            Strand::ReadingFoundational,
            Strand::Writing,
            Strand::SpeakingAndListening,
            Strand::Language,
        ]
    }

    /// Exact match against the data file's strand names.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().into_iter().find(|s| s.display_name() == name)
    }

    /// Position in the preferred display order.
    pub fn order(&self) -> usize {
        *self as usize
    }
}

/// Theme for any strand name, neutral when the name is not recognized.
pub fn theme_for(name: &str) -> StrandTheme {
    Strand::from_name(name)
        .map(|s| s.theme())
        .unwrap_or(NEUTRAL_THEME)
}

/// Ordering of strand names: known strands in preferred order, then unknown
/// names alphabetically.
pub fn compare_strand_names(a: &str, b: &str) -> Ordering {
    match (Strand::from_name(a), Strand::from_name(b)) {
        (Some(x), Some(y)) => x.order().cmp(&y.order()),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_round_trip() {
        for strand in Strand::all() {
            assert_eq!(Strand::from_name(strand.display_name()), Some(strand));
        }
        assert_eq!(Strand::from_name("reading literary"), None);
    }

    #[test]
    fn test_unknown_strand_gets_neutral_theme() {
        assert_eq!(theme_for("Media Literacy"), NEUTRAL_THEME);
        assert_eq!(theme_for("Writing"), Strand::Writing.theme());
    }

    #[test]
    fn test_compare_strand_names() {
        let mut names = vec![
            "Zoology",
            "Language",
            "Media Literacy",
            "Writing",
            "Reading Literary",
        ];
        names.sort_by(|a, b| compare_strand_names(a, b));
        assert_eq!(
            names,
            vec![
                "Reading Literary",
                "Writing",
                "Language",
                "Media Literacy",
                "Zoology"
            ]
        );
    }
}
