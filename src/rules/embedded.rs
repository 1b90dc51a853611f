//! Built-in country rule table.
//!
//! The table is embedded as a JSON string in the same format accepted by
//! [`RuleTable::from_json`](super::RuleTable::from_json), so a custom table can
//! start from a copy of this one.

/// Returns the standard rule table as a JSON string.
///
/// Entries without a `template` use the generic grouping.
pub fn standard_rules() -> &'static str {
    r#"{
  "rules": [
    { "code": "+1",   "country": "United States / Canada", "minDigits": 10, "maxDigits": 10, "template": "(DDD) DDD-DDDD" },
    { "code": "+44",  "country": "United Kingdom",         "minDigits": 10, "maxDigits": 11, "template": "DDDD DDD DDDD" },
    { "code": "+91",  "country": "India",                  "minDigits": 10, "maxDigits": 10, "template": "DDDDD DDDDD" },
    { "code": "+61",  "country": "Australia",              "minDigits": 9,  "maxDigits": 10 },
    { "code": "+81",  "country": "Japan",                  "minDigits": 10, "maxDigits": 11 },
    { "code": "+86",  "country": "China",                  "minDigits": 11, "maxDigits": 11 },
    { "code": "+49",  "country": "Germany",                "minDigits": 10, "maxDigits": 11 },
    { "code": "+33",  "country": "France",                 "minDigits": 9,  "maxDigits": 9 },
    { "code": "+39",  "country": "Italy",                  "minDigits": 9,  "maxDigits": 10 },
    { "code": "+34",  "country": "Spain",                  "minDigits": 9,  "maxDigits": 9 },
    { "code": "+7",   "country": "Russia",                 "minDigits": 10, "maxDigits": 10 },
    { "code": "+52",  "country": "Mexico",                 "minDigits": 10, "maxDigits": 10 },
    { "code": "+55",  "country": "Brazil",                 "minDigits": 10, "maxDigits": 11 },
    { "code": "+27",  "country": "South Africa",           "minDigits": 9,  "maxDigits": 9 },
    { "code": "+82",  "country": "South Korea",            "minDigits": 9,  "maxDigits": 10 },
    { "code": "+62",  "country": "Indonesia",              "minDigits": 9,  "maxDigits": 12 },
    { "code": "+66",  "country": "Thailand",               "minDigits": 9,  "maxDigits": 9 },
    { "code": "+31",  "country": "Netherlands",            "minDigits": 9,  "maxDigits": 9 },
    { "code": "+46",  "country": "Sweden",                 "minDigits": 9,  "maxDigits": 10 },
    { "code": "+47",  "country": "Norway",                 "minDigits": 8,  "maxDigits": 8 },
    { "code": "+45",  "country": "Denmark",                "minDigits": 8,  "maxDigits": 8 },
    { "code": "+41",  "country": "Switzerland",            "minDigits": 9,  "maxDigits": 9 },
    { "code": "+43",  "country": "Austria",                "minDigits": 10, "maxDigits": 11 },
    { "code": "+32",  "country": "Belgium",                "minDigits": 9,  "maxDigits": 9 },
    { "code": "+48",  "country": "Poland",                 "minDigits": 9,  "maxDigits": 9 },
    { "code": "+20",  "country": "Egypt",                  "minDigits": 10, "maxDigits": 10 },
    { "code": "+971", "country": "United Arab Emirates",   "minDigits": 9,  "maxDigits": 9 },
    { "code": "+65",  "country": "Singapore",              "minDigits": 8,  "maxDigits": 8 },
    { "code": "+852", "country": "Hong Kong",              "minDigits": 8,  "maxDigits": 8 },
    { "code": "+64",  "country": "New Zealand",            "minDigits": 8,  "maxDigits": 10 }
  ]
}"#
}
