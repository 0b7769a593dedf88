use std::fmt;

use serde::Deserialize;

// ---------------------------------------------------------------------------
// Status: resolution state of a report or inquiry
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Received,
    Scheduled,
    Resolved,
    Answered,
    Unanswered,
}

impl Status {
    /// Korean label shown in tables and the status dropdown.
    pub fn label(self) -> &'static str {
        match self {
            Self::Received => "접수 중",
            Self::Scheduled => "처리 예정",
            Self::Resolved => "처리 완료",
            Self::Answered => "답변 완료",
            Self::Unanswered => "답변 안함",
        }
    }

    /// Stable machine key, used in seed files and MCP responses.
    pub fn key(self) -> &'static str {
        match self {
            Self::Received => "received",
            Self::Scheduled => "scheduled",
            Self::Resolved => "resolved",
            Self::Answered => "answered",
            Self::Unanswered => "unanswered",
        }
    }

    /// Parse either the machine key (case-insensitive) or the Korean label.
    pub fn parse(s: &str) -> Option<Self> {
        let trimmed = s.trim();
        let lower = trimmed.to_ascii_lowercase();
        match lower.as_str() {
            "received" | "접수 중" => Some(Self::Received),
            "scheduled" | "처리 예정" => Some(Self::Scheduled),
            "resolved" | "처리 완료" => Some(Self::Resolved),
            "answered" | "답변 완료" => Some(Self::Answered),
            "unanswered" | "답변 안함" => Some(Self::Unanswered),
            _ => None,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Status {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Status::parse(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown status '{s}'")))
    }
}

// ---------------------------------------------------------------------------
// Category: which board a record belongs to
// ---------------------------------------------------------------------------

static REPORT_STATUSES: [Status; 3] = [Status::Received, Status::Scheduled, Status::Resolved];
static INQUIRY_STATUSES: [Status; 2] = [Status::Answered, Status::Unanswered];

/// Column / field headings that differ between reports and inquiries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldLabels {
    pub content: &'static str,
    pub author: &'static str,
    pub date: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Category {
    #[default]
    Facility,
    SchoolLife,
    Inquiry,
}

impl Category {
    /// Tab order.
    pub const ALL: [Category; 3] = [Self::Facility, Self::SchoolLife, Self::Inquiry];

    pub fn label(self) -> &'static str {
        match self {
            Self::Facility => "시설 신고",
            Self::SchoolLife => "학교생활 신고",
            Self::Inquiry => "문의사항",
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Self::Facility => "facility",
            Self::SchoolLife => "school-life",
            Self::Inquiry => "inquiry",
        }
    }

    /// The closed set of statuses a record in this category may carry.
    pub fn statuses(self) -> &'static [Status] {
        match self {
            Self::Facility | Self::SchoolLife => &REPORT_STATUSES,
            Self::Inquiry => &INQUIRY_STATUSES,
        }
    }

    pub fn allows(self, status: Status) -> bool {
        self.statuses().contains(&status)
    }

    pub fn field_labels(self) -> FieldLabels {
        match self {
            Self::Facility | Self::SchoolLife => FieldLabels {
                content: "신고 내용",
                author: "신고자",
                date: "신고일",
            },
            Self::Inquiry => FieldLabels {
                content: "문의 내용",
                author: "문의자",
                date: "문의일",
            },
        }
    }

    /// Noun used in the row-count footer ("총 N개의 신고가 있습니다.").
    pub fn noun(self) -> &'static str {
        match self {
            Self::Facility | Self::SchoolLife => "신고",
            Self::Inquiry => "문의",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Self::Facility => 0,
            Self::SchoolLife => 1,
            Self::Inquiry => 2,
        }
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Accepts the machine key, a few spelling variants, or the Korean label.
    pub fn from_str_loose(s: &str) -> Option<Self> {
        let lower = s.trim().to_ascii_lowercase();
        match lower.as_str() {
            "facility" | "facilities" | "시설 신고" => Some(Self::Facility),
            "school-life" | "school_life" | "schoollife" | "school" | "학교생활 신고" => {
                Some(Self::SchoolLife)
            }
            "inquiry" | "inquiries" | "문의사항" => Some(Self::Inquiry),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Category::from_str_loose(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown category '{s}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocabularies_are_disjoint() {
        for status in Category::Facility.statuses() {
            assert!(!Category::Inquiry.allows(*status));
        }
        assert_eq!(
            Category::Facility.statuses(),
            Category::SchoolLife.statuses()
        );
    }

    #[test]
    fn test_status_parse_accepts_label_and_key() {
        assert_eq!(Status::parse("처리 예정"), Some(Status::Scheduled));
        assert_eq!(Status::parse("SCHEDULED"), Some(Status::Scheduled));
        assert_eq!(Status::parse(" answered "), Some(Status::Answered));
        assert_eq!(Status::parse("pending"), None);
    }
}
