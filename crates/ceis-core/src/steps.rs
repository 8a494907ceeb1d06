//! The six-step registration form catalog
//!
//! Mirrors the paper form handed out by the OC: personal info, health,
//! contact details, expectations, collaboration options, and terms.
//! Steps are configuration, never derived state.

use crate::types::{ChoiceOption, FieldDef, FieldKind, SelectOption, StepDef};

/// Stable answer-store keys, one per field plus the derived fee keys.
pub mod keys {
    pub const NAME: &str = "name";
    pub const CIN: &str = "cin";
    pub const UNIVERSITY: &str = "university";
    pub const GENDER: &str = "gender";
    pub const DOB: &str = "dob";
    pub const POSITION: &str = "position";
    pub const DEPARTMENT: &str = "department";
    pub const ALLERGIES: &str = "allergies";
    pub const CHRONIC: &str = "chronic";
    pub const MEDICAL_DETAILS: &str = "medical-details";
    pub const EMAIL: &str = "email";
    pub const PHONE: &str = "phone";
    pub const EMERGENCY: &str = "emergency";
    pub const ZODIAC: &str = "zodiac";
    pub const GOALS: &str = "goals";
    pub const TOPICS: &str = "topics";
    pub const SUPPORT: &str = "support";
    pub const COMM: &str = "comm";
    pub const BUS: &str = "bus";
    pub const ROOM: &str = "room";
    pub const TERMS: &str = "terms";
    pub const SIGNATURE: &str = "signature";
    /// The photo field has no string value; the attachment lives beside the map
    pub const PHOTO: &str = "photo";
    /// Derived: formatted total, e.g. "145 DT"
    pub const TOTAL_FEE: &str = "total-fee";
}

const GENDER_OPTIONS: &[ChoiceOption] = &[
    ChoiceOption { label: "♂️ Male", value: "Male", price: 0 },
    ChoiceOption { label: "♀️ Female", value: "Female", price: 0 },
];

const POSITION_OPTIONS: &[SelectOption] = &[
    SelectOption { value: "TL", label: "Team Leader / Middle Manager" },
    SelectOption { value: "TM", label: "Team Member / Oldie" },
    SelectOption { value: "Newbie", label: "Newbie" },
];

const DEPARTMENT_OPTIONS: &[SelectOption] = &[
    SelectOption { value: "Not assigned yet", label: "Not assigned yet" },
    SelectOption { value: "OGV", label: "OGV" },
    SelectOption { value: "OGT", label: "OGT" },
    SelectOption { value: "ICX", label: "ICX" },
    SelectOption { value: "TM&IM", label: "TM&IM" },
    SelectOption { value: "PM&Ewa", label: "PM&Ewa" },
    SelectOption { value: "F&L", label: "F&L" },
    SelectOption { value: "MKT", label: "MKT" },
    SelectOption { value: "BD", label: "BD" },
];

const YES_NO: &[ChoiceOption] = &[
    ChoiceOption { label: "Yes", value: "Yes", price: 0 },
    ChoiceOption { label: "No", value: "No", price: 0 },
];

const COMM_OPTIONS: &[ChoiceOption] = &[
    ChoiceOption { label: "📧 Email", value: "Email", price: 0 },
    ChoiceOption { label: "🟢 WhatsApp", value: "WhatsApp", price: 0 },
    ChoiceOption { label: "💬 Messenger", value: "Messenger", price: 0 },
    ChoiceOption { label: "✨ Other", value: "Other", price: 0 },
];

const BUS_OPTIONS: &[ChoiceOption] = &[
    ChoiceOption { label: "Departure Only (+20 DT)", value: "Departure Only", price: 20 },
    ChoiceOption { label: "Return Only (+20 DT)", value: "Return Only", price: 20 },
    ChoiceOption { label: "Full Package (+30 DT)", value: "Full Package", price: 30 },
    ChoiceOption { label: "None (I will arrange my own)", value: "None", price: 0 },
];

const ROOM_OPTIONS: &[ChoiceOption] = &[
    ChoiceOption { label: "No (Shared accommodation included)", value: "No", price: 0 },
    ChoiceOption { label: "Yes (+100 DT Total)", value: "Yes", price: 100 },
];

const STEP_1: &[FieldDef] = &[
    FieldDef {
        key: keys::NAME,
        label: "👤 Full Name",
        placeholder: "Enter your full name",
        kind: FieldKind::Text,
        required: true,
    },
    FieldDef {
        key: keys::CIN,
        label: "🆔 Numéro CIN",
        placeholder: "Enter your CIN number (e.g., 12345678)",
        kind: FieldKind::Text,
        required: true,
    },
    FieldDef {
        key: keys::UNIVERSITY,
        label: "🎓 University",
        placeholder: "Enter your university name",
        kind: FieldKind::Text,
        required: true,
    },
    FieldDef {
        key: keys::GENDER,
        label: "🚻 Gender",
        placeholder: "",
        kind: FieldKind::Choice { options: GENDER_OPTIONS },
        required: true,
    },
    FieldDef {
        key: keys::DOB,
        label: "📅 Date of Birth",
        placeholder: "",
        kind: FieldKind::Date,
        required: true,
    },
    FieldDef {
        key: keys::POSITION,
        label: "🎭 AIESEC Position",
        placeholder: "Select your position",
        kind: FieldKind::Select { options: POSITION_OPTIONS },
        required: true,
    },
    FieldDef {
        key: keys::DEPARTMENT,
        label: "🏢 AIESEC Department",
        placeholder: "Select your department",
        kind: FieldKind::Select { options: DEPARTMENT_OPTIONS },
        required: true,
    },
];

const STEP_2: &[FieldDef] = &[
    FieldDef {
        key: keys::ALLERGIES,
        label: "🍏 Do you have any allergies?",
        placeholder: "",
        kind: FieldKind::Choice { options: YES_NO },
        required: true,
    },
    FieldDef {
        key: keys::CHRONIC,
        label: "🏥 Chronic medical conditions we should be aware of?",
        placeholder: "",
        kind: FieldKind::Choice { options: YES_NO },
        required: false,
    },
    FieldDef {
        key: keys::MEDICAL_DETAILS,
        label: "📝 Please specify details for any of the above (Optional)",
        placeholder: "List your allergies or medical conditions here...",
        kind: FieldKind::TextArea { rows: 3 },
        required: false,
    },
];

const STEP_3: &[FieldDef] = &[
    FieldDef {
        key: keys::EMAIL,
        label: "📧 Email Address",
        placeholder: "your.email@example.com",
        kind: FieldKind::Email,
        required: true,
    },
    FieldDef {
        key: keys::PHONE,
        label: "📞 Phone Number",
        placeholder: "+216 XX XXX XXX",
        kind: FieldKind::Tel,
        required: true,
    },
    FieldDef {
        key: keys::EMERGENCY,
        label: "🚨 Emergency Phone Number",
        placeholder: "+216 XX XXX XXX",
        kind: FieldKind::Tel,
        required: true,
    },
];

const STEP_4: &[FieldDef] = &[
    FieldDef {
        key: keys::ZODIAC,
        label: "✨ Choose Your Astrological Sign",
        placeholder: "",
        kind: FieldKind::ZodiacGrid,
        required: true,
    },
    FieldDef {
        key: keys::GOALS,
        label: "🎯 What are your main goals for attending the conference?",
        placeholder: "Share your goals and expectations...",
        kind: FieldKind::TextArea { rows: 3 },
        required: true,
    },
    FieldDef {
        key: keys::TOPICS,
        label: "💡 Which topics or sessions interest you most?",
        placeholder: "Tell us about the topics that excite you...",
        kind: FieldKind::TextArea { rows: 3 },
        required: true,
    },
];

const STEP_5: &[FieldDef] = &[
    FieldDef {
        key: keys::SUPPORT,
        label: "🤝 How can our team support you during the event?",
        placeholder: "Let us know how we can help...",
        kind: FieldKind::TextArea { rows: 3 },
        required: false,
    },
    FieldDef {
        key: keys::COMM,
        label: "💬 Preferred Communication Method",
        placeholder: "",
        kind: FieldKind::Choice { options: COMM_OPTIONS },
        required: true,
    },
    FieldDef {
        key: keys::BUS,
        label: "🚌 Transportation / Bus Options",
        placeholder: "",
        kind: FieldKind::Choice { options: BUS_OPTIONS },
        required: true,
    },
    FieldDef {
        key: keys::ROOM,
        label: "🏨 Single Room Upgrade",
        placeholder: "",
        kind: FieldKind::Choice { options: ROOM_OPTIONS },
        required: true,
    },
    FieldDef {
        key: keys::PHOTO,
        label: "📸 Upload a photo of yourself",
        placeholder: "Format: JPG, PNG, GIF (max 2MB)",
        kind: FieldKind::Photo,
        required: false,
    },
];

const STEP_6: &[FieldDef] = &[
    FieldDef {
        key: keys::SIGNATURE,
        label: "DIGITAL SIGNATURE",
        placeholder: "Sign here",
        kind: FieldKind::Signature,
        required: true,
    },
    FieldDef {
        key: keys::TERMS,
        label: "I have read and agree to the Terms & Conditions",
        placeholder: "",
        kind: FieldKind::Checkbox,
        required: true,
    },
];

/// The ordered step sequence of the reference configuration.
pub const STEPS: &[StepDef] = &[
    StepDef { title: "👤 Personal Info", fields: STEP_1 },
    StepDef { title: "🍏 Health & Dietary", fields: STEP_2 },
    StepDef { title: "📱 Contact Details", fields: STEP_3 },
    StepDef { title: "🎯 Conference Expectations", fields: STEP_4 },
    StepDef { title: "💛 Collaboration & Support", fields: STEP_5 },
    StepDef { title: "📜 Terms & Conditions", fields: STEP_6 },
];

/// Number of steps in the form.
pub fn step_count() -> usize {
    STEPS.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn six_steps() {
        assert_eq!(step_count(), 6);
    }

    #[test]
    fn field_keys_are_unique_across_steps() {
        let mut seen = HashSet::new();
        for step in STEPS {
            for field in step.fields {
                assert!(seen.insert(field.key), "duplicate key {}", field.key);
            }
        }
    }

    #[test]
    fn bus_and_room_carry_the_published_prices() {
        let bus: Vec<u32> = BUS_OPTIONS.iter().map(|o| o.price).collect();
        assert_eq!(bus, vec![20, 20, 30, 0]);
        let room: Vec<u32> = ROOM_OPTIONS.iter().map(|o| o.price).collect();
        assert_eq!(room, vec![0, 100]);
    }

    #[test]
    fn last_step_requires_signature_and_terms() {
        let last = STEPS.last().unwrap();
        let required: Vec<_> = last.required_keys().collect();
        assert_eq!(required, vec![keys::SIGNATURE, keys::TERMS]);
    }
}
