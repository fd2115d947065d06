use std::time::Duration;

pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Loading,
    Success,
    Error,
}

impl ToastKind {
    fn default_duration(&self) -> Option<Duration> {
        match self {
            ToastKind::Loading => None,
            ToastKind::Success | ToastKind::Error => Some(DEFAULT_TOAST_DURATION),
        }
    }
}

/// What to show. A `None` duration means the kind's default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: ToastKind,
    pub message: String,
    pub duration: Option<Duration>,
}

impl Notice {
    pub fn loading(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Loading,
            message: message.into(),
            duration: None,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            message: message.into(),
            duration: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            message: message.into(),
            duration: None,
        }
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// How long the toast stays up; `None` until replaced or dismissed.
    pub fn lifetime(&self) -> Option<Duration> {
        self.duration.or(self.kind.default_duration())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(u64);

/// Identifies one showing of a toast, so a timer set for an earlier
/// notice can't expire the one that replaced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastHandle {
    pub id: ToastId,
    revision: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    revision: u64,
    pub notice: Notice,
}

#[derive(Debug, Clone, Default)]
pub struct Toaster {
    toasts: Vec<Toast>,
    next_id: u64,
    next_revision: u64,
}

impl Toaster {
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn show(&mut self, notice: Notice) -> ToastHandle {
        let id = ToastId(self.next_id);
        self.next_id += 1;
        self.push(id, notice)
    }

    /// Swaps the notice in place, or shows it fresh if `id` is gone.
    pub fn replace(&mut self, id: ToastId, notice: Notice) -> ToastHandle {
        let revision = self.bump();
        match self.toasts.iter_mut().find(|t| t.id == id) {
            Some(toast) => {
                toast.revision = revision;
                toast.notice = notice;
                ToastHandle { id, revision }
            }
            None => self.show(notice),
        }
    }

    pub fn dismiss(&mut self, id: ToastId) {
        self.toasts.retain(|t| t.id != id);
    }

    /// Removes the toast only if it still shows the notice `handle` refers to.
    pub fn expire(&mut self, handle: ToastHandle) -> bool {
        let before = self.toasts.len();
        self.toasts
            .retain(|t| !(t.id == handle.id && t.revision == handle.revision));
        self.toasts.len() != before
    }

    fn push(&mut self, id: ToastId, notice: Notice) -> ToastHandle {
        let revision = self.bump();
        self.toasts.push(Toast {
            id,
            revision,
            notice,
        });
        ToastHandle { id, revision }
    }

    fn bump(&mut self) -> u64 {
        self.next_revision += 1;
        self.next_revision
    }
}
