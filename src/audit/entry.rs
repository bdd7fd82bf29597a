//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Update,
    Delete,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Update => write!(f, "UPDATE"),
            Operation::Delete => write!(f, "DELETE"),
        }
    }
}

/// What kind of record an operation touched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Profile,
    LogEntry,
    /// A whole day's log (resets)
    DailyLog,
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityType::Profile => write!(f, "Profile"),
            EntityType::LogEntry => write!(f, "LogEntry"),
            EntityType::DailyLog => write!(f, "DailyLog"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// User the state belongs to
    pub user: String,

    pub operation: Operation,

    pub entity_type: EntityType,

    /// Entry id, ISO date, or the user id for profiles
    pub entity_id: String,

    /// Human-readable label (e.g. food name)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,

    /// Human-readable diff summary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff_summary: Option<String>,
}

impl AuditEntry {
    fn base(
        user: &str,
        operation: Operation,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            user: user.to_string(),
            operation,
            entity_type,
            entity_id: entity_id.into(),
            entity_name,
            before: None,
            after: None,
            diff_summary: None,
        }
    }

    /// Record a newly created entity
    pub fn create<T: Serialize>(
        user: &str,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Self {
        Self {
            after: serde_json::to_value(entity).ok(),
            ..Self::base(user, Operation::Create, entity_type, entity_id, entity_name)
        }
    }

    /// Record a change, with an optional pre-computed diff
    pub fn update<T: Serialize>(
        user: &str,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        before: &T,
        after: &T,
        diff_summary: Option<String>,
    ) -> Self {
        Self {
            before: serde_json::to_value(before).ok(),
            after: serde_json::to_value(after).ok(),
            diff_summary,
            ..Self::base(user, Operation::Update, entity_type, entity_id, None)
        }
    }

    /// Record a removed entity
    pub fn delete<T: Serialize>(
        user: &str,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Self {
        Self {
            before: serde_json::to_value(entity).ok(),
            ..Self::base(user, Operation::Delete, entity_type, entity_id, entity_name)
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {} {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.user,
            self.operation,
            self.entity_type,
            self.entity_id
        );

        if let Some(name) = &self.entity_name {
            output.push_str(&format!(" ({})", name));
        }

        if let Some(diff) = &self.diff_summary {
            output.push_str(&format!("\n  Changes: {}", diff));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_entry() {
        let entry = AuditEntry::create(
            "guest",
            EntityType::LogEntry,
            "ent-12345678",
            Some("Банан".to_string()),
            &json!({"name": "Банан", "grams": 120}),
        );

        assert_eq!(entry.operation, Operation::Create);
        assert_eq!(entry.user, "guest");
        assert!(entry.before.is_none());
        assert!(entry.after.is_some());
    }

    #[test]
    fn test_update_entry() {
        let entry = AuditEntry::update(
            "guest",
            EntityType::Profile,
            "guest",
            &json!({"weight": 70.0}),
            &json!({"weight": 68.5}),
            Some("weight: 70.0 -> 68.5".to_string()),
        );

        assert_eq!(entry.operation, Operation::Update);
        assert!(entry.before.is_some());
        assert!(entry.after.is_some());
        assert_eq!(entry.diff_summary.as_deref(), Some("weight: 70.0 -> 68.5"));
    }

    #[test]
    fn test_delete_entry() {
        let entry = AuditEntry::delete(
            "guest",
            EntityType::DailyLog,
            "2025-03-01",
            None,
            &json!([]),
        );

        assert_eq!(entry.operation, Operation::Delete);
        assert!(entry.before.is_some());
        assert!(entry.after.is_none());
    }

    #[test]
    fn test_serialization() {
        let entry = AuditEntry::create("42", EntityType::LogEntry, "ent-1", None, &json!({}));

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["entity_type"], "log_entry");
        assert_eq!(json["operation"], "create");

        let back: AuditEntry = serde_json::from_value(json).unwrap();
        assert_eq!(back.entity_type, EntityType::LogEntry);
    }

    #[test]
    fn test_human_readable_format() {
        let entry = AuditEntry::create(
            "guest",
            EntityType::LogEntry,
            "ent-12345678",
            Some("Яблоко".to_string()),
            &json!({}),
        );

        let formatted = entry.format_human_readable();
        assert!(formatted.contains("CREATE"));
        assert!(formatted.contains("LogEntry"));
        assert!(formatted.contains("ent-12345678"));
        assert!(formatted.contains("Яблоко"));
    }
}
