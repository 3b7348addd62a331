/// Identifies a toast so a later outcome can replace it in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToastKind {
    Loading,
    Success,
    Error,
}

impl ToastKind {
    /// Loading toasts stay until replaced; outcomes fade out on their own
    pub fn auto_dismiss(&self) -> bool {
        !matches!(self, ToastKind::Loading)
    }

    pub fn css_modifier(&self) -> &'static str {
        match self {
            ToastKind::Loading => "toast--loading",
            ToastKind::Success => "toast--success",
            ToastKind::Error => "toast--error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub kind: ToastKind,
    pub message: String,
}

/// Visible toasts, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    /// Shows a toast. When `replaces` names a toast that is still visible,
    /// that toast is rewritten in place and keeps its id.
    pub fn push(&mut self, kind: ToastKind, message: String, replaces: Option<ToastId>) -> ToastId {
        if let Some(id) = replaces {
            if let Some(existing) = self.toasts.iter_mut().find(|t| t.id == id) {
                existing.kind = kind;
                existing.message = message;
                return id;
            }
        }

        self.next_id += 1;
        let id = ToastId(self.next_id);
        self.toasts.push(Toast { id, kind, message });
        id
    }

    pub fn dismiss(&mut self, id: ToastId) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn get(&self, id: ToastId) -> Option<&Toast> {
        self.toasts.iter().find(|t| t.id == id)
    }

    pub fn count(&self, kind: ToastKind) -> usize {
        self.toasts.iter().filter(|t| t.kind == kind).count()
    }
}
