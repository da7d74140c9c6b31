use trellis_core::calendar::SelectionType;

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionMode {
    /// a single date
    Normal,
    /// a start and end date
    Range,
}

impl From<SelectionMode> for SelectionType {
    fn from(mode: SelectionMode) -> Self {
        match mode {
            SelectionMode::Normal => SelectionType::Normal,
            SelectionMode::Range => SelectionType::Range,
        }
    }
}
