pub mod strand;

pub use strand::{compare_strand_names, theme_for, Strand, StrandTheme, NEUTRAL_THEME};
