// src/extractors/labels.rs

// --- Label Marker Table ---
// Every label is matched against an uppercased line, so spellings are stored
// uppercased. Order inside a row is priority order.

/// Headings that open the announcement section.
pub const SECTION_START_MARKERS: &[&str] = &["THÔNG BÁO LỊCH CẮT ĐIỆN", "THONG BAO LICH CAT DIEN"];

/// Headings of the page sections that follow the announcement.
pub const SECTION_END_MARKERS: &[&str] = &[
    "TRA CỨU LỊCH MẤT ĐIỆN",
    "CÁC DỊCH VỤ TRA CỨU",
    "TRA CUU LICH MAT DIEN",
];

/// Line labels that carry a value after their colon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    Customer,
    Address,
    ScheduleCode,
    TimeWindow,
    Reason,
}

impl Label {
    pub const ALL: [Label; 5] = [
        Label::Customer,
        Label::Address,
        Label::ScheduleCode,
        Label::TimeWindow,
        Label::Reason,
    ];

    /// Accepted spellings, diacritic form first.
    pub fn spellings(self) -> &'static [&'static str] {
        match self {
            Label::Customer => &["KHÁCH HÀNG:", "KHACH HANG:"],
            Label::Address => &["ĐỊA CHỈ:", "DIA CHI:"],
            Label::ScheduleCode => &["MÃ LỊCH:", "MA LICH:"],
            Label::TimeWindow => &["THỜI GIAN:", "THOI GIAN:"],
            Label::Reason => &["LÝ DO NGỪNG CUNG CẤP ĐIỆN:", "LY DO NGUNG CUNG CAP DIEN:"],
        }
    }

    /// Short tag used in debug dumps.
    pub fn tag(self) -> &'static str {
        match self {
            Label::Customer => "CUSTOMER",
            Label::Address => "ADDRESS",
            Label::ScheduleCode => "CODE",
            Label::TimeWindow => "TIME",
            Label::Reason => "REASON",
        }
    }

    /// Case-insensitive "starts with any spelling" test.
    pub fn matches(self, line: &str) -> bool {
        let upper = line.to_uppercase();
        self.spellings().iter().any(|s| upper.starts_with(s))
    }

    /// Returns the trimmed value after the first colon when `line` carries this label.
    pub fn value_of(self, line: &str) -> Option<String> {
        if !self.matches(line) {
            return None;
        }
        Some(value_after_colon(line).to_string())
    }

    /// First label in `ALL` order that `line` carries.
    pub fn classify(line: &str) -> Option<Label> {
        Label::ALL.into_iter().find(|label| label.matches(line))
    }
}

/// Trimmed remainder after the first ':'; the whole trimmed line if there is none.
pub fn value_after_colon(line: &str) -> &str {
    match line.split_once(':') {
        Some((_, rest)) => rest.trim(),
        None => line.trim(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spellings_are_uppercase() {
        for label in Label::ALL {
            for spelling in label.spellings() {
                assert_eq!(*spelling, spelling.to_uppercase(), "{:?} spelling not uppercase", label);
            }
        }
        for marker in SECTION_START_MARKERS.iter().chain(SECTION_END_MARKERS) {
            assert_eq!(*marker, marker.to_uppercase());
        }
    }

    #[test]
    fn test_matches_both_spellings_any_case() {
        assert!(Label::Customer.matches("Khách hàng: Nguyen Van A"));
        assert!(Label::Customer.matches("khach hang: Nguyen Van A"));
        assert!(Label::Address.matches("Địa chỉ: 123 Main St"));
        assert!(Label::Reason.matches("Lý do ngừng cung cấp điện: Bảo trì"));
        assert!(!Label::Customer.matches("Mã khách hàng: PB123"));
    }

    #[test]
    fn test_value_of_takes_first_colon() {
        assert_eq!(Label::TimeWindow.value_of("THỜI GIAN:  08:00-10:00 "), Some("08:00-10:00".to_string()));
        assert_eq!(Label::ScheduleCode.value_of("MA LICH:"), Some(String::new()));
        assert_eq!(Label::ScheduleCode.value_of("THOI GIAN: 08:00"), None);
    }

    #[test]
    fn test_classify() {
        assert_eq!(Label::classify("ma lich: X1"), Some(Label::ScheduleCode));
        assert_eq!(Label::classify("random text"), None);
    }
}
