use leptos::prelude::*;

/// Progress of the résumé download button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResumeStatus {
    Idle,
    Generating,
    Done,
    Failed,
}

impl ResumeStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ResumeStatus::Idle => "Download CV",
            ResumeStatus::Generating => "Generating CV...",
            ResumeStatus::Done => "CV Downloaded!",
            ResumeStatus::Failed => "CV Failed - Retry",
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            ResumeStatus::Idle => "cv-btn",
            ResumeStatus::Generating => "cv-btn cv-btn-busy",
            ResumeStatus::Done => "cv-btn cv-btn-done",
            ResumeStatus::Failed => "cv-btn cv-btn-failed",
        }
    }

    pub fn is_busy(&self) -> bool {
        matches!(self, ResumeStatus::Generating)
    }
}

/// Page-wide view flags. Signals are `Copy`, so the whole struct is handed
/// to components by value.
#[derive(Clone, Copy)]
pub struct PageState {
    pub menu_open: RwSignal<bool>,
    pub active_section: RwSignal<&'static str>,
    pub show_mobile_header: RwSignal<bool>,
    pub show_side_nav: RwSignal<bool>,
    pub resume: RwSignal<ResumeStatus>,
}

impl PageState {
    pub fn new() -> Self {
        PageState {
            menu_open: RwSignal::new(false),
            active_section: RwSignal::new("home"),
            show_mobile_header: RwSignal::new(false),
            show_side_nav: RwSignal::new(false),
            resume: RwSignal::new(ResumeStatus::Idle),
        }
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_generating_is_busy() {
        assert!(ResumeStatus::Generating.is_busy());
        assert!(!ResumeStatus::Idle.is_busy());
        assert!(!ResumeStatus::Done.is_busy());
        assert!(!ResumeStatus::Failed.is_busy());
    }

    #[test]
    fn labels_match_button_text() {
        assert_eq!(ResumeStatus::Generating.label(), "Generating CV...");
        assert_eq!(ResumeStatus::Done.label(), "CV Downloaded!");
    }
}
