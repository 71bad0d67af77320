use std::collections::HashMap;

use crate::domain::UserId;

/// The one channel a user currently wants relayed to them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonitorTarget {
    pub owner: UserId,
    pub channel_ref: String,
    /// Free-form label given with `/monitor`; informational only.
    pub pattern: Option<String>,
}

/// Per-user monitoring targets. At most one target per user.
#[derive(Debug, Default)]
pub struct MonitorRegistry {
    targets: HashMap<UserId, MonitorTarget>,
}

impl MonitorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace whatever `owner` was watching. Returns the replaced target, if any.
    ///
    /// No check is made that the channel exists.
    pub fn set_target(
        &mut self,
        owner: UserId,
        channel_ref: impl Into<String>,
        pattern: Option<String>,
    ) -> Option<MonitorTarget> {
        self.targets.insert(
            owner,
            MonitorTarget {
                owner,
                channel_ref: channel_ref.into(),
                pattern,
            },
        )
    }

    /// Remove and return `owner`'s target; `None` means nothing was active.
    pub fn clear_target(&mut self, owner: UserId) -> Option<MonitorTarget> {
        self.targets.remove(&owner)
    }

    pub fn get_target(&self, owner: UserId) -> Option<&MonitorTarget> {
        self.targets.get(&owner)
    }

    /// Users whose target is exactly `channel_id`, in ascending id order.
    pub fn watchers_of(&self, channel_id: &str) -> Vec<UserId> {
        let mut out: Vec<UserId> = self
            .targets
            .values()
            .filter(|t| t.channel_ref == channel_id)
            .map(|t| t.owner)
            .collect();
        out.sort();
        out
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_target_overwrites_previous() {
        let mut reg = MonitorRegistry::new();
        assert!(reg.set_target(UserId(1), "@foo", None).is_none());

        let prev = reg
            .set_target(UserId(1), "@bar", Some("Ca".to_string()))
            .unwrap();
        assert_eq!(prev.channel_ref, "@foo");

        let cur = reg.get_target(UserId(1)).unwrap();
        assert_eq!(cur.channel_ref, "@bar");
        assert_eq!(cur.pattern.as_deref(), Some("Ca"));
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn clear_target_reports_absence() {
        let mut reg = MonitorRegistry::new();
        assert!(reg.clear_target(UserId(7)).is_none());

        reg.set_target(UserId(7), "@foo", None);
        assert_eq!(reg.clear_target(UserId(7)).unwrap().channel_ref, "@foo");
        assert!(reg.get_target(UserId(7)).is_none());
        assert!(reg.is_empty());
    }

    #[test]
    fn targets_are_per_user() {
        let mut reg = MonitorRegistry::new();
        reg.set_target(UserId(2), "@foo", None);
        reg.set_target(UserId(1), "@foo", None);
        reg.set_target(UserId(3), "@bar", None);

        assert_eq!(reg.watchers_of("@foo"), vec![UserId(1), UserId(2)]);
        assert_eq!(reg.watchers_of("@bar"), vec![UserId(3)]);
        assert!(reg.watchers_of("@FOO").is_empty());

        reg.clear_target(UserId(1));
        assert_eq!(reg.watchers_of("@foo"), vec![UserId(2)]);
    }
}
