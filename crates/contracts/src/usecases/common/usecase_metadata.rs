/// Identification of a simulated long-running operation, used in log lines
/// and widget titles.
pub trait UseCaseMetadata {
    /// Index such as "u501"
    fn usecase_index() -> &'static str;

    /// Technical name such as "fhsis_report"
    fn usecase_name() -> &'static str;

    /// Title shown on the widget
    fn display_name() -> &'static str;

    fn description() -> &'static str {
        ""
    }

    /// "u501_fhsis_report"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}
