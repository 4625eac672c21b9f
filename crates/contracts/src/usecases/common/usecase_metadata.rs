/// Static identity of a UseCase: the page title and subtitle come from here,
/// and `full_name` is used as the page root id
pub trait UseCaseMetadata {
    /// Short index such as "u601"
    const INDEX: &'static str;
    /// snake_case technical name
    const NAME: &'static str;
    const DISPLAY_NAME: &'static str;
    const DESCRIPTION: &'static str = "";

    /// `INDEX` and `NAME` joined with an underscore
    fn full_name() -> String {
        format!("{}_{}", Self::INDEX, Self::NAME)
    }
}
