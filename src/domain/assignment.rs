use std::fmt;

/// How a card's driver changed across an edit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverChange {
    Unchanged,
    Assigned,
    Reassigned,
    Unassigned,
}

impl DriverChange {
    pub fn classify(prior_driver: &str, new_driver: &str) -> Self {
        match (prior_driver.is_empty(), new_driver.is_empty()) {
            (true, false) => Self::Assigned,
            (false, true) => Self::Unassigned,
            _ if prior_driver == new_driver => Self::Unchanged,
            _ => Self::Reassigned,
        }
    }
}

impl fmt::Display for DriverChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unchanged => write!(f, "unchanged"),
            Self::Assigned => write!(f, "assigned"),
            Self::Reassigned => write!(f, "reassigned"),
            Self::Unassigned => write!(f, "unassigned"),
        }
    }
}

/// Returns the assignment count after a driver change.
///
/// Only an unassigned to assigned change counts; reassigning to another driver
/// does not.
pub fn next_assigned_count(prior_driver: &str, new_driver: &str, count: u32) -> u32 {
    match DriverChange::classify(prior_driver, new_driver) {
        DriverChange::Assigned => count.saturating_add(1),
        _ => count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(DriverChange::classify("", ""), DriverChange::Unchanged);
        assert_eq!(DriverChange::classify("", "Driver-001"), DriverChange::Assigned);
        assert_eq!(
            DriverChange::classify("Driver-001", "Driver-001"),
            DriverChange::Unchanged
        );
        assert_eq!(
            DriverChange::classify("Driver-001", "Driver-002"),
            DriverChange::Reassigned
        );
        assert_eq!(DriverChange::classify("Driver-001", ""), DriverChange::Unassigned);
    }

    #[test]
    fn test_next_assigned_count() {
        assert_eq!(next_assigned_count("", "Driver-002", 0), 1);
        assert_eq!(next_assigned_count("", "Driver-002", 3), 4);
        assert_eq!(next_assigned_count("Driver-002", "Driver-003", 1), 1);
        assert_eq!(next_assigned_count("Driver-002", "", 1), 1);
        assert_eq!(next_assigned_count("Driver-002", "Driver-002", 1), 1);
        assert_eq!(next_assigned_count("", "", 0), 0);
    }
}
