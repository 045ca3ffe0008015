//! # Submission Form Store
//!
//! Explicit state machine for the post box:
//! `Idle -> Drafting (title non-empty) -> Submitting -> {Idle, Drafting}`.
//! The store owns the current state; consumers pull immutable snapshots and
//! may subscribe to transitions. It performs no I/O itself — the submission
//! coordinator drives Submitting and its resolution.

/// Everything the user has typed so far. Optional fields only carry while
/// the title is non-empty (clearing the title discards the draft).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Draft {
    pub title: String,
    pub body: Option<String>,
    pub image: Option<String>,
    /// Target topic when the form is not pinned to a fixed community
    pub topic: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormState {
    Idle,
    Drafting(Draft),
    Submitting(Draft),
}

type Subscriber = Box<dyn Fn(&FormState) + Send + Sync>;

pub struct FormStore {
    state: FormState,
    subscribers: Vec<Subscriber>,
}

impl Default for FormStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FormStore {
    pub fn new() -> Self {
        Self {
            state: FormState::Idle,
            subscribers: Vec::new(),
        }
    }

    pub fn snapshot(&self) -> FormState {
        self.state.clone()
    }

    /// Registers a transition listener. It immediately receives the current
    /// state so late subscribers do not miss the initial snapshot.
    pub fn subscribe(&mut self, subscriber: impl Fn(&FormState) + Send + Sync + 'static) {
        subscriber(&self.state);
        self.subscribers.push(Box::new(subscriber));
    }

    fn transition(&mut self, next: FormState) {
        self.state = next;
        for subscriber in &self.subscribers {
            subscriber(&self.state);
        }
    }

    /// Title edits drive the Idle <-> Drafting edge. Ignored while a
    /// submission is in flight.
    pub fn set_title(&mut self, title: &str) {
        match (&self.state, title.is_empty()) {
            (FormState::Submitting(_), _) => {
                tracing::debug!("title edit ignored while submitting");
            }
            (_, true) => self.transition(FormState::Idle),
            (FormState::Drafting(draft), false) => {
                let mut draft = draft.clone();
                draft.title = title.to_string();
                self.transition(FormState::Drafting(draft));
            }
            (FormState::Idle, false) => {
                self.transition(FormState::Drafting(Draft {
                    title: title.to_string(),
                    ..Draft::default()
                }));
            }
        }
    }

    pub fn set_body(&mut self, body: &str) {
        self.edit_draft(|draft| draft.body = non_empty(body));
    }

    pub fn set_image(&mut self, image: &str) {
        self.edit_draft(|draft| draft.image = non_empty(image));
    }

    pub fn set_topic(&mut self, topic: &str) {
        self.edit_draft(|draft| draft.topic = non_empty(topic));
    }

    /// Optional fields exist only while Drafting; edits anywhere else drop.
    fn edit_draft(&mut self, edit: impl FnOnce(&mut Draft)) {
        if let FormState::Drafting(draft) = &self.state {
            let mut draft = draft.clone();
            edit(&mut draft);
            self.transition(FormState::Drafting(draft));
        }
    }

    /// Drafting -> Submitting; returns the draft being submitted.
    /// `None` when there is nothing submittable (Idle or already in flight).
    pub(crate) fn begin_submit(&mut self) -> Option<Draft> {
        if let FormState::Drafting(draft) = &self.state {
            let draft = draft.clone();
            self.transition(FormState::Submitting(draft.clone()));
            Some(draft)
        } else {
            None
        }
    }

    /// Success clears the form; failure hands the draft back for another try.
    pub(crate) fn resolve_submit(&mut self, succeeded: bool) {
        if let FormState::Submitting(draft) = &self.state {
            let next = if succeeded {
                FormState::Idle
            } else {
                FormState::Drafting(draft.clone())
            };
            self.transition(next);
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
