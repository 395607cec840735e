use serde_json::Value;

/// Routing intent surfaced to the navigation collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationIntent {
    Home,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Destructive,
}

/// Output surface of the page controller: signals queued during dispatch
/// and drained by the view layer. The controller never renders chrome
/// itself; scrolling, dialogs, toasts and routing are collaborator work.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Bring a newly added entry into view.
    ScrollTo { sub_id: String },
    /// Ask the dialog collaborator to confirm a deletion.
    ConfirmRemove { sub_id: String, title: String },
    Toast { kind: ToastKind, message: String },
    /// The validated save payload, ready for the host to persist.
    EmitPayload(Value),
    Navigate(NavigationIntent),
}
