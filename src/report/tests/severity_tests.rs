//! Unit tests for the severity presentation table.

use crate::report::domain::Severity;
use rstest::rstest;

#[rstest]
#[case(Severity::Info, ":information_source:", 0x3B_88C3, false)]
#[case(Severity::Warning, ":warning:", 0xFF_CC4D, true)]
#[case(Severity::Error, ":no_entry:", 0xBE_1931, false)]
fn style_table_matches_presentation(
    #[case] severity: Severity,
    #[case] glyph: &str,
    #[case] color: u32,
    #[case] help_footer: bool,
) {
    let style = severity.style();
    assert_eq!(style.glyph, glyph);
    assert_eq!(style.color, color);
    assert_eq!(style.help_footer, help_footer);
}

#[rstest]
#[case(Severity::Info, "info")]
#[case(Severity::Warning, "warning")]
#[case(Severity::Error, "error")]
fn as_str_and_display_agree(#[case] severity: Severity, #[case] name: &str) {
    assert_eq!(severity.as_str(), name);
    assert_eq!(severity.to_string(), name);
}

#[rstest]
fn only_warnings_carry_the_footer_by_default() {
    let with_default_footer: Vec<Severity> = [Severity::Info, Severity::Warning, Severity::Error]
        .into_iter()
        .filter(|severity| severity.style().help_footer)
        .collect();

    assert_eq!(with_default_footer, vec![Severity::Warning]);
}
