use serde::Serialize;

/// Control kind advertised for an option, mirrored by client-side UIs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionKind {
    Text,
    Number,
    Checkbox,
    Select,
    Radio,
}

/// Default value for an option, serialized as the bare JSON scalar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum OptionDefault {
    Bool(bool),
    Int(i64),
    Str(&'static str),
}

/// One key/label choice offered by a select or radio option.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SelectValue {
    pub value: &'static str,
    pub label: &'static str,
}

impl SelectValue {
    pub const fn new(value: &'static str, label: &'static str) -> Self {
        Self { value, label }
    }
}

/// One configurable parameter of a generatable type.
///
/// Specs are advisory: they describe the UI control and its defaults, while
/// the consuming generator applies its own defaulting at generation time.
/// Declared min/max bounds are not re-checked server-side.
#[derive(Debug, Clone, Serialize)]
pub struct OptionSpec {
    pub key: &'static str,
    pub label: &'static str,
    #[serde(rename = "type")]
    pub kind: OptionKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<OptionDefault>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<i64>,
    #[serde(skip_serializing_if = "no_values")]
    pub values: &'static [SelectValue],
}

fn no_values(values: &&'static [SelectValue]) -> bool {
    values.is_empty()
}

impl OptionSpec {
    const fn base(key: &'static str, label: &'static str, kind: OptionKind) -> Self {
        Self {
            key,
            label,
            kind,
            default: None,
            placeholder: None,
            min: None,
            max: None,
            values: &[],
        }
    }

    pub const fn text(key: &'static str, label: &'static str, placeholder: &'static str) -> Self {
        let mut spec = Self::base(key, label, OptionKind::Text);
        spec.placeholder = Some(placeholder);
        spec
    }

    pub const fn checkbox(key: &'static str, label: &'static str, default: bool) -> Self {
        let mut spec = Self::base(key, label, OptionKind::Checkbox);
        spec.default = Some(OptionDefault::Bool(default));
        spec
    }

    pub const fn number(key: &'static str, label: &'static str, default: i64) -> Self {
        let mut spec = Self::base(key, label, OptionKind::Number);
        spec.default = Some(OptionDefault::Int(default));
        spec
    }

    pub const fn bounded_number(
        key: &'static str,
        label: &'static str,
        default: i64,
        min: i64,
        max: i64,
    ) -> Self {
        let mut spec = Self::number(key, label, default);
        spec.min = Some(min);
        spec.max = Some(max);
        spec
    }

    pub const fn select(
        key: &'static str,
        label: &'static str,
        values: &'static [SelectValue],
        default: &'static str,
    ) -> Self {
        let mut spec = Self::base(key, label, OptionKind::Select);
        spec.values = values;
        spec.default = Some(OptionDefault::Str(default));
        spec
    }

    pub const fn radio(
        key: &'static str,
        label: &'static str,
        values: &'static [SelectValue],
        default: &'static str,
    ) -> Self {
        let mut spec = Self::base(key, label, OptionKind::Radio);
        spec.values = values;
        spec.default = Some(OptionDefault::Str(default));
        spec
    }
}

/// Catalog entry for one generatable type.
///
/// Descriptors are built once when the registry is assembled and are
/// read-only afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct TypeDescriptor {
    #[serde(rename = "type")]
    pub type_id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub category: &'static str,
    pub supports_prefix_suffix: bool,
    pub options: Vec<OptionSpec>,
}
