// Select option model

/// One entry of a closed-choice selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}

impl SelectOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Label of the option whose value matches `value`.
pub fn label_for<'a>(options: &'a [SelectOption], value: &str) -> Option<&'a str> {
    options
        .iter()
        .find(|option| option.value == value)
        .map(|option| option.label.as_str())
}
