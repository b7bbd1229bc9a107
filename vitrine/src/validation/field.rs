use std::fmt;

/// Identity of one contact form input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldId {
    Name,
    Email,
    Phone,
    Company,
    Message,
}

impl FieldId {
    /// Every field on the contact form, in document order.
    pub const ALL: [FieldId; 5] = [
        FieldId::Name,
        FieldId::Email,
        FieldId::Phone,
        FieldId::Company,
        FieldId::Message,
    ];

    /// The fields checked on submission. `Company` is optional and only
    /// travels with the submitted record.
    pub const VALIDATED: [FieldId; 4] = [
        FieldId::Name,
        FieldId::Email,
        FieldId::Phone,
        FieldId::Message,
    ];

    /// Element id used by the page markup.
    pub fn as_str(self) -> &'static str {
        match self {
            FieldId::Name => "name",
            FieldId::Email => "email",
            FieldId::Phone => "phone",
            FieldId::Company => "company",
            FieldId::Message => "message",
        }
    }

    /// Whether this field takes part in form validation.
    pub fn is_validated(self) -> bool {
        Self::VALIDATED.contains(&self)
    }

    /// Position in [`FieldId::ALL`].
    pub(crate) fn index(self) -> usize {
        match self {
            FieldId::Name => 0,
            FieldId::Email => 1,
            FieldId::Phone => 2,
            FieldId::Company => 3,
            FieldId::Message => 4,
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input type of a field, which selects the shape rule applied to it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FieldKind {
    #[default]
    Text,
    Email,
    Tel,
    Textarea,
}

/// A user-editable input tracked by the validator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    id: FieldId,
    kind: FieldKind,
    required: bool,
    raw_value: String,
}

impl Field {
    /// Create an optional, empty field.
    pub fn new(id: FieldId, kind: FieldKind) -> Self {
        Self {
            id,
            kind,
            required: false,
            raw_value: String::new(),
        }
    }

    /// The field as declared on the contact form.
    pub fn contact(id: FieldId) -> Self {
        match id {
            FieldId::Name => Self::new(id, FieldKind::Text).required(),
            FieldId::Email => Self::new(id, FieldKind::Email).required(),
            FieldId::Phone => Self::new(id, FieldKind::Tel).required(),
            FieldId::Company => Self::new(id, FieldKind::Text),
            FieldId::Message => Self::new(id, FieldKind::Textarea).required(),
        }
    }

    /// Mark the field as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Builder form of [`Field::set_value`].
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.raw_value = value.into();
        self
    }

    pub fn id(&self) -> FieldId {
        self.id
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    /// The value exactly as typed.
    pub fn value(&self) -> &str {
        &self.raw_value
    }

    /// The value with surrounding whitespace removed.
    pub fn trimmed(&self) -> &str {
        self.raw_value.trim()
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.raw_value = value.into();
    }

    pub fn clear(&mut self) {
        self.raw_value.clear();
    }
}
