use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::config::config;
use crate::shared::icons::icon;

/// Visual variant of a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    fn css_modifier(self) -> &'static str {
        match self {
            NoticeKind::Success => "notice--success",
            NoticeKind::Error => "notice--error",
        }
    }
}

/// Transient message describing the outcome of an operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }
}

/// Surface for operation outcomes
pub trait Notifier {
    fn notify(&self, notice: Notice);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveNotice {
    pub id: u64,
    pub notice: Notice,
}

/// Notices currently on screen, oldest first
#[derive(Debug, Clone, Default)]
pub struct NoticeQueue {
    next_id: u64,
    items: Vec<ActiveNotice>,
}

impl NoticeQueue {
    pub fn push(&mut self, notice: Notice) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(ActiveNotice { id, notice });
        id
    }

    /// Remove a notice; unknown ids (already dismissed) are ignored
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|n| n.id != id);
    }

    pub fn items(&self) -> &[ActiveNotice] {
        &self.items
    }
}

/// Notice queue shared through context
#[derive(Clone, Copy)]
pub struct NoticeService {
    queue: RwSignal<NoticeQueue>,
}

impl NoticeService {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(NoticeQueue::default()),
        }
    }

    /// Show a notice and dismiss it after the configured timeout
    pub fn show(&self, notice: Notice) {
        let queue = self.queue;
        let Some(id) = queue.try_update(|q| q.push(notice)) else {
            return;
        };
        let timeout_ms = config().notice.timeout_ms;
        spawn_local(async move {
            TimeoutFuture::new(timeout_ms).await;
            let _ = queue.try_update(|q| q.dismiss(id));
        });
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|q| q.dismiss(id));
    }
}

impl Default for NoticeService {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for NoticeService {
    fn notify(&self, notice: Notice) {
        self.show(notice);
    }
}

pub fn use_notices() -> NoticeService {
    use_context::<NoticeService>().expect("NoticeService not provided in context")
}

/// Stack of notices pinned to the top-right corner
#[component]
pub fn NoticeHost() -> impl IntoView {
    let service = use_notices();

    view! {
        <div class="notice-stack" role="status" aria-live="polite">
            <For
                each=move || service.queue.with(|q| q.items().to_vec())
                key=|n| n.id
                children=move |active| {
                    let id = active.id;
                    let class = format!("notice {}", active.notice.kind.css_modifier());
                    view! {
                        <div class=class>
                            <span class="notice__text">{active.notice.text}</span>
                            <button
                                class="notice__close"
                                aria-label="Close"
                                on:click=move |_| service.dismiss(id)
                            >
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
