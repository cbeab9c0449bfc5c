//! Display settings and their validation rules.
//!
//! The public display reads six parameters: scroll duration, font size and
//! names per row, each for desktop and mobile layouts. Updates are partial:
//! a [`SettingsPatch`] is validated as a whole against [`FIELD_RULES`] and
//! then merged over the current document.

use serde::{Deserialize, Serialize};
use serde_json::json;

use super::Error;

pub(crate) const SETTINGS_UPDATED_MESSAGE: &str = "설정이 업데이트되었습니다.";

/// Persisted display settings.
///
/// Missing fields load with their defaults so documents written before a
/// field existed remain readable.
///
/// # Examples
/// ```
/// use roster::domain::DisplaySettings;
///
/// let legacy = r#"{"scrollSpeed":300,"fontSize":3,"mobileScrollSpeed":900,
///     "mobileFontSize":1.5,"mobileStudentsPerRow":2}"#;
/// let settings: DisplaySettings = serde_json::from_str(legacy).unwrap();
/// assert_eq!(settings.scroll_speed, 300);
/// assert_eq!(settings.students_per_row, 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DisplaySettings {
    /// Seconds for one full desktop scroll cycle.
    pub scroll_speed: u32,
    /// Desktop font size in rem.
    pub font_size: f64,
    /// Names per row on desktop.
    pub students_per_row: u32,
    /// Seconds for one full mobile scroll cycle.
    pub mobile_scroll_speed: u32,
    /// Mobile font size in rem.
    pub mobile_font_size: f64,
    /// Names per row on mobile.
    pub mobile_students_per_row: u32,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            scroll_speed: 600,
            font_size: 2.0,
            students_per_row: 7,
            mobile_scroll_speed: 900,
            mobile_font_size: 1.5,
            mobile_students_per_row: 3,
        }
    }
}

/// Partial settings update. `None` leaves the field unchanged; JSON `null`
/// is treated the same as an absent key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsPatch {
    #[serde(default)]
    pub scroll_speed: Option<f64>,
    #[serde(default)]
    pub font_size: Option<f64>,
    #[serde(default)]
    pub students_per_row: Option<f64>,
    #[serde(default)]
    pub mobile_scroll_speed: Option<f64>,
    #[serde(default)]
    pub mobile_font_size: Option<f64>,
    #[serde(default)]
    pub mobile_students_per_row: Option<f64>,
}

/// Identifies one settings field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsField {
    ScrollSpeed,
    FontSize,
    StudentsPerRow,
    MobileScrollSpeed,
    MobileFontSize,
    MobileStudentsPerRow,
}

impl SettingsField {
    /// Wire name of the field.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ScrollSpeed => "scrollSpeed",
            Self::FontSize => "fontSize",
            Self::StudentsPerRow => "studentsPerRow",
            Self::MobileScrollSpeed => "mobileScrollSpeed",
            Self::MobileFontSize => "mobileFontSize",
            Self::MobileStudentsPerRow => "mobileStudentsPerRow",
        }
    }
}

/// Closed range and label for one field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldRule {
    pub field: SettingsField,
    pub min: f64,
    pub max: f64,
    /// Whether the value must be a whole number.
    pub whole: bool,
    label: &'static str,
    unit: &'static str,
}

impl FieldRule {
    fn check(&self, value: f64) -> Result<(), Error> {
        if !(self.min..=self.max).contains(&value) {
            return Err(self.reject(format!(
                "{}는 {}{unit}에서 {}{unit} 사이여야 합니다.",
                self.label,
                self.min,
                self.max,
                unit = self.unit,
            )));
        }
        if self.whole && value.fract() != 0.0 {
            return Err(self.reject(format!("{}는 정수여야 합니다.", self.label)));
        }
        Ok(())
    }

    fn reject(&self, message: String) -> Error {
        Error::invalid_request(message).with_details(json!({
            "field": self.field.as_str(),
            "min": self.min,
            "max": self.max,
        }))
    }
}

/// Validation rules in the order fields are checked.
pub const FIELD_RULES: [FieldRule; 6] = [
    FieldRule {
        field: SettingsField::ScrollSpeed,
        min: 30.0,
        max: 1800.0,
        whole: true,
        label: "데스크톱 스크롤 속도",
        unit: "초",
    },
    FieldRule {
        field: SettingsField::FontSize,
        min: 0.5,
        max: 5.0,
        whole: false,
        label: "데스크톱 글씨 크기",
        unit: "rem",
    },
    FieldRule {
        field: SettingsField::StudentsPerRow,
        min: 1.0,
        max: 10.0,
        whole: true,
        label: "데스크톱 한 줄당 학생 수",
        unit: "명",
    },
    FieldRule {
        field: SettingsField::MobileScrollSpeed,
        min: 30.0,
        max: 1800.0,
        whole: true,
        label: "모바일 스크롤 속도",
        unit: "초",
    },
    FieldRule {
        field: SettingsField::MobileFontSize,
        min: 0.5,
        max: 5.0,
        whole: false,
        label: "모바일 글씨 크기",
        unit: "rem",
    },
    FieldRule {
        field: SettingsField::MobileStudentsPerRow,
        min: 1.0,
        max: 6.0,
        whole: true,
        label: "모바일 한 줄당 학생 수",
        unit: "명",
    },
];

impl SettingsPatch {
    fn value(&self, field: SettingsField) -> Option<f64> {
        match field {
            SettingsField::ScrollSpeed => self.scroll_speed,
            SettingsField::FontSize => self.font_size,
            SettingsField::StudentsPerRow => self.students_per_row,
            SettingsField::MobileScrollSpeed => self.mobile_scroll_speed,
            SettingsField::MobileFontSize => self.mobile_font_size,
            SettingsField::MobileStudentsPerRow => self.mobile_students_per_row,
        }
    }

    /// Check every present field, reporting the first violation.
    pub fn validate(&self) -> Result<(), Error> {
        FIELD_RULES.iter().try_for_each(|rule| match self.value(rule.field) {
            Some(value) => rule.check(value),
            None => Ok(()),
        })
    }
}

// Only called on values that passed a whole-number rule bounded by 1800.
fn whole(value: f64) -> u32 {
    value as u32
}

impl DisplaySettings {
    /// Validate `patch` and return `self` with the present fields replaced.
    ///
    /// Nothing is applied when any field fails validation.
    ///
    /// # Examples
    /// ```
    /// use roster::domain::{DisplaySettings, SettingsPatch};
    ///
    /// let current = DisplaySettings::default();
    /// let patch = SettingsPatch { scroll_speed: Some(30.0), ..SettingsPatch::default() };
    /// let merged = current.merged(&patch).unwrap();
    /// assert_eq!(merged.scroll_speed, 30);
    /// assert_eq!(merged.font_size, current.font_size);
    ///
    /// let too_fast = SettingsPatch { scroll_speed: Some(29.0), ..SettingsPatch::default() };
    /// assert!(current.merged(&too_fast).is_err());
    /// ```
    pub fn merged(&self, patch: &SettingsPatch) -> Result<Self, Error> {
        patch.validate()?;
        Ok(Self {
            scroll_speed: patch.scroll_speed.map_or(self.scroll_speed, whole),
            font_size: patch.font_size.unwrap_or(self.font_size),
            students_per_row: patch.students_per_row.map_or(self.students_per_row, whole),
            mobile_scroll_speed: patch
                .mobile_scroll_speed
                .map_or(self.mobile_scroll_speed, whole),
            mobile_font_size: patch.mobile_font_size.unwrap_or(self.mobile_font_size),
            mobile_students_per_row: patch
                .mobile_students_per_row
                .map_or(self.mobile_students_per_row, whole),
        })
    }
}
