/// Whether a result row is currently asking to confirm a wishlist add.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowPrompt {
    #[default]
    Idle,
    Confirming,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptEvent {
    Request,
    Confirm,
    Dismiss,
}

impl RowPrompt {
    /// Applies `event` and returns the next state, plus whether the add
    /// should be forwarded to the parent.
    ///
    /// Events that make no sense in the current state leave it unchanged.
    pub fn apply(self, event: PromptEvent) -> (RowPrompt, bool) {
        match (self, event) {
            (RowPrompt::Idle, PromptEvent::Request) => (RowPrompt::Confirming, false),
            (RowPrompt::Confirming, PromptEvent::Confirm) => (RowPrompt::Idle, true),
            (RowPrompt::Confirming, PromptEvent::Dismiss) => (RowPrompt::Idle, false),
            (state, _) => (state, false),
        }
    }

    pub fn is_confirming(self) -> bool {
        self == RowPrompt::Confirming
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_request_then_confirm_emits_once() {
        let (state, emit) = RowPrompt::default().apply(PromptEvent::Request);
        assert_eq!(state, RowPrompt::Confirming);
        assert!(!emit);

        let (state, emit) = state.apply(PromptEvent::Confirm);
        assert_eq!(state, RowPrompt::Idle);
        assert!(emit);
    }

    #[test]
    fn test_request_then_dismiss_does_not_emit() {
        let (state, _) = RowPrompt::Idle.apply(PromptEvent::Request);
        let (state, emit) = state.apply(PromptEvent::Dismiss);

        assert_eq!(state, RowPrompt::Idle);
        assert!(!emit);
    }

    #[rstest]
    #[case(RowPrompt::Idle, PromptEvent::Confirm)]
    #[case(RowPrompt::Idle, PromptEvent::Dismiss)]
    #[case(RowPrompt::Confirming, PromptEvent::Request)]
    fn test_out_of_place_events_are_ignored(#[case] start: RowPrompt, #[case] event: PromptEvent) {
        assert_eq!(start.apply(event), (start, false));
    }
}
