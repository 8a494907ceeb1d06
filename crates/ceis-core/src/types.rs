//! Form configuration types
//!
//! Steps, fields, and options are plain immutable data. The desktop app
//! renders them generically; nothing in here knows about the view layer.

/// One entry of a native `select` dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectOption {
    /// Value stored in the answer store and sent on the wire
    pub value: &'static str,
    /// Human-readable label shown in the dropdown
    pub label: &'static str,
}

/// One button of a mutually-exclusive choice group.
///
/// `label` carries any price suffix for display ("Full Package (+30 DT)");
/// `value` is the plain value stored and submitted ("Full Package").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChoiceOption {
    pub label: &'static str,
    pub value: &'static str,
    /// Surcharge added to the base fee when this option is selected
    pub price: u32,
}

/// What kind of control a field renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    Date,
    Select { options: &'static [SelectOption] },
    Choice { options: &'static [ChoiceOption] },
    TextArea { rows: u32 },
    /// Native file picker feeding the photo attachment
    Photo,
    /// Zodiac sign grid with the constellation particle field at its center
    ZodiacGrid,
    /// Freehand signature capture surface
    Signature,
    Checkbox,
}

/// Immutable descriptor for one form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    /// Stable answer-store key, unique across all steps
    pub key: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub kind: FieldKind,
    /// Required fields block step advancement while unfilled
    pub required: bool,
}

/// Immutable descriptor for one page of the multi-step form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepDef {
    pub title: &'static str,
    pub fields: &'static [FieldDef],
}

impl StepDef {
    /// Keys of the required fields on this step.
    pub fn required_keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().filter(|f| f.required).map(|f| f.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_keys_filters() {
        const FIELDS: &[FieldDef] = &[
            FieldDef {
                key: "a",
                label: "A",
                placeholder: "",
                kind: FieldKind::Text,
                required: true,
            },
            FieldDef {
                key: "b",
                label: "B",
                placeholder: "",
                kind: FieldKind::Text,
                required: false,
            },
        ];
        let step = StepDef {
            title: "t",
            fields: FIELDS,
        };
        let keys: Vec<_> = step.required_keys().collect();
        assert_eq!(keys, vec!["a"]);
    }
}
