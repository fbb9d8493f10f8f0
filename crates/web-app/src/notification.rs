use std::collections::VecDeque;

const MAX_NOTIFICATIONS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Success,
    Error,
}

/// Message shown to the user as a toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: Kind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: Kind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: Kind::Error,
            message: message.into(),
        }
    }
}

/// Pending notifications, oldest first. When full, the oldest notification is dropped.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Notifications(VecDeque<Notification>);

impl Notifications {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notification: Notification) {
        if self.0.len() == MAX_NOTIFICATIONS {
            self.0.pop_front();
        }
        self.0.push_back(notification);
    }

    pub fn pop(&mut self) -> Option<Notification> {
        self.0.pop_front()
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Notification> + '_ {
        self.0.drain(..)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_notifications() {
        let mut notifications = Notifications::new();
        assert!(notifications.is_empty());

        notifications.push(Notification::success("Template duplicato con successo"));
        notifications.push(Notification::error("Errore nel caricamento del template"));

        assert_eq!(notifications.len(), 2);
        assert_eq!(
            notifications.pop(),
            Some(Notification {
                kind: Kind::Success,
                message: "Template duplicato con successo".to_string()
            })
        );
        assert_eq!(
            notifications.drain().collect::<Vec<_>>(),
            vec![Notification::error("Errore nel caricamento del template")]
        );
        assert!(notifications.is_empty());
    }

    #[test]
    fn test_notifications_drop_oldest() {
        let mut notifications = Notifications::new();
        for i in 0..=MAX_NOTIFICATIONS {
            notifications.push(Notification::error(i.to_string()));
        }

        assert_eq!(notifications.len(), MAX_NOTIFICATIONS);
        assert_eq!(notifications.pop(), Some(Notification::error("1")));
    }
}
