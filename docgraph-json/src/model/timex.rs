/// A resolved temporal expression.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Timex {
    pub tid: Option<String>,
    pub timex_type: Option<String>,
    pub value: Option<String>,
    pub alt_value: Option<String>,
    /// Only rendered when explicitly attached.
    pub range: Option<TimexRange>,
}

/// Begin, end, and duration of a range-valued expression.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimexRange {
    pub begin: Option<String>,
    pub end: Option<String>,
    pub duration: Option<String>,
}
