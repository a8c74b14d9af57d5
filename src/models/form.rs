use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One selectable answer of a choice question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChoiceOption {
    pub value: &'static str,
    pub label: &'static str,
}

const fn option(value: &'static str, label: &'static str) -> ChoiceOption {
    ChoiceOption { value, label }
}

pub const WATCH_DURATION_OPTIONS: &[ChoiceOption] = &[
    option("new", "Mới gần đây"),
    option("under_6m", "Dưới 6 tháng"),
    option("6m_to_1y", "Từ 6 tháng đến 1 năm"),
    option("over_1y", "Trên 1 năm"),
];

pub const PLATFORM_OPTIONS: &[ChoiceOption] = &[
    option("youtube", "YouTube"),
    option("facebook", "Facebook"),
    option("tiktok", "TikTok"),
    option("other", "Nền tảng khác"),
];

pub const MARITAL_STATUS_OPTIONS: &[ChoiceOption] = &[
    option("single", "Độc thân"),
    option("married", "Đã kết hôn"),
];

pub const GENDER_OPTIONS: &[ChoiceOption] = &[option("male", "Nam"), option("female", "Nữ")];

/// The fixed schema of the survey. Field order is the order questions appear on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurveyField {
    Email,
    WatchDuration,
    Platform,
    CommunityNeed,
    Profession,
    MaritalStatus,
    Gender,
    Location,
    Phone,
    Telegram,
}

impl SurveyField {
    pub const ALL: [SurveyField; 10] = [
        SurveyField::Email,
        SurveyField::WatchDuration,
        SurveyField::Platform,
        SurveyField::CommunityNeed,
        SurveyField::Profession,
        SurveyField::MaritalStatus,
        SurveyField::Gender,
        SurveyField::Location,
        SurveyField::Phone,
        SurveyField::Telegram,
    ];

    /// Name used for the HTML `name` attribute and the CSV header.
    pub fn name(self) -> &'static str {
        match self {
            SurveyField::Email => "email",
            SurveyField::WatchDuration => "watch_duration",
            SurveyField::Platform => "platform",
            SurveyField::CommunityNeed => "community_need",
            SurveyField::Profession => "profession",
            SurveyField::MaritalStatus => "marital_status",
            SurveyField::Gender => "gender",
            SurveyField::Location => "location",
            SurveyField::Phone => "phone",
            SurveyField::Telegram => "telegram",
        }
    }

    /// Allowed values for single-select questions, `None` for text fields.
    pub fn options(self) -> Option<&'static [ChoiceOption]> {
        match self {
            SurveyField::WatchDuration => Some(WATCH_DURATION_OPTIONS),
            SurveyField::Platform => Some(PLATFORM_OPTIONS),
            SurveyField::MaritalStatus => Some(MARITAL_STATUS_OPTIONS),
            SurveyField::Gender => Some(GENDER_OPTIONS),
            _ => None,
        }
    }

    pub fn is_choice(self) -> bool {
        self.options().is_some()
    }
}

impl fmt::Display for SurveyField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SurveyField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SurveyField::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| format!("Unknown survey field: {}", s))
    }
}

/// All answers of one respondent. Every field starts out empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyDraft {
    pub email: String,
    pub watch_duration: String,
    pub platform: String,
    pub community_need: String,
    pub profession: String,
    pub marital_status: String,
    pub gender: String,
    pub location: String,
    pub phone: String,
    pub telegram: String,
}

impl SurveyDraft {
    pub fn get(&self, field: SurveyField) -> &str {
        match field {
            SurveyField::Email => &self.email,
            SurveyField::WatchDuration => &self.watch_duration,
            SurveyField::Platform => &self.platform,
            SurveyField::CommunityNeed => &self.community_need,
            SurveyField::Profession => &self.profession,
            SurveyField::MaritalStatus => &self.marital_status,
            SurveyField::Gender => &self.gender,
            SurveyField::Location => &self.location,
            SurveyField::Phone => &self.phone,
            SurveyField::Telegram => &self.telegram,
        }
    }

    pub fn set(&mut self, field: SurveyField, value: impl Into<String>) {
        let slot = match field {
            SurveyField::Email => &mut self.email,
            SurveyField::WatchDuration => &mut self.watch_duration,
            SurveyField::Platform => &mut self.platform,
            SurveyField::CommunityNeed => &mut self.community_need,
            SurveyField::Profession => &mut self.profession,
            SurveyField::MaritalStatus => &mut self.marital_status,
            SurveyField::Gender => &mut self.gender,
            SurveyField::Location => &mut self.location,
            SurveyField::Phone => &mut self.phone,
            SurveyField::Telegram => &mut self.telegram,
        };
        *slot = value.into();
    }

    /// Returns a copy of the draft with `field` replaced and everything else untouched.
    pub fn with_field(mut self, field: SurveyField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Field values in schema order, used for CSV rows and log output.
    pub fn values(&self) -> impl Iterator<Item = (SurveyField, &str)> {
        SurveyField::ALL.into_iter().map(move |field| (field, self.get(field)))
    }
}
