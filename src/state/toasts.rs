/// How long a toast stays on screen.
pub(crate) const TOAST_TTL_MS: i32 = 4000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum NoticeKind {
    Success,
    Error,
}

/// Fire-and-forget user notification emitted by the workflows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Toast {
    pub id: u64,
    pub notice: Notice,
}

#[derive(Clone, Debug, Default)]
pub(crate) struct ToastStack {
    next_id: u64,
    items: Vec<Toast>,
}

impl ToastStack {
    pub fn push(&mut self, notice: Notice) -> u64 {
        self.next_id += 1;
        self.items.push(Toast {
            id: self.next_id,
            notice,
        });
        self.next_id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_dismiss() {
        let mut stack = ToastStack::default();
        let a = stack.push(Notice::success("saved"));
        let b = stack.push(Notice::error("failed"));
        assert_ne!(a, b);
        assert_eq!(stack.items().len(), 2);

        stack.dismiss(a);
        assert_eq!(stack.items().len(), 1);
        assert_eq!(stack.items()[0].notice.kind, NoticeKind::Error);

        stack.dismiss(a);
        assert_eq!(stack.items().len(), 1);
    }
}
