//! Employee records and the field-name lookup table.

use serde::Serialize;
use std::fmt;

/// One employee row. Every field is always present; blanks are `""`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRecord {
    pub employee_id: String,
    pub name: String,
    pub employment_type: String,
    pub active_flag: String,
}

impl EmployeeRecord {
    pub fn new(
        employee_id: impl Into<String>,
        name: impl Into<String>,
        employment_type: impl Into<String>,
        active_flag: impl Into<String>,
    ) -> Self {
        EmployeeRecord {
            employee_id: employee_id.into(),
            name: name.into(),
            employment_type: employment_type.into(),
            active_flag: active_flag.into(),
        }
    }

    /// Build a record by asking for each field in turn.
    pub fn from_fn(mut value: impl FnMut(EmployeeField) -> String) -> Self {
        EmployeeRecord {
            employee_id: value(EmployeeField::EmployeeId),
            name: value(EmployeeField::Name),
            employment_type: value(EmployeeField::EmploymentType),
            active_flag: value(EmployeeField::ActiveFlag),
        }
    }

    pub fn get(&self, field: EmployeeField) -> &str {
        field.get(self)
    }

    /// Fields paired with their values, in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (EmployeeField, &str)> + '_ {
        EmployeeField::ALL.into_iter().map(move |f| (f, f.get(self)))
    }
}

/// The four record fields, usable as data (e.g. "unique values of field X").
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum EmployeeField {
    EmployeeId,
    Name,
    EmploymentType,
    ActiveFlag,
}

type Accessor = fn(&EmployeeRecord) -> &str;

fn employee_id_of(r: &EmployeeRecord) -> &str {
    &r.employee_id
}

fn name_of(r: &EmployeeRecord) -> &str {
    &r.name
}

fn employment_type_of(r: &EmployeeRecord) -> &str {
    &r.employment_type
}

fn active_flag_of(r: &EmployeeRecord) -> &str {
    &r.active_flag
}

// Indexed by `EmployeeField as usize`.
const ACCESSORS: [Accessor; 4] = [
    employee_id_of,
    name_of,
    employment_type_of,
    active_flag_of,
];

impl EmployeeField {
    pub const ALL: [EmployeeField; 4] = [
        EmployeeField::EmployeeId,
        EmployeeField::Name,
        EmployeeField::EmploymentType,
        EmployeeField::ActiveFlag,
    ];

    /// Wire name used in serialized records.
    pub fn name(self) -> &'static str {
        match self {
            EmployeeField::EmployeeId => "employeeId",
            EmployeeField::Name => "name",
            EmployeeField::EmploymentType => "employmentType",
            EmployeeField::ActiveFlag => "activeFlag",
        }
    }

    /// Header label the field is read from by default.
    pub fn default_label(self) -> &'static str {
        match self {
            EmployeeField::EmployeeId => "社員番号",
            EmployeeField::Name => "名前",
            EmployeeField::EmploymentType => "雇用形態",
            EmployeeField::ActiveFlag => "在籍中フラグ",
        }
    }

    pub fn get(self, record: &EmployeeRecord) -> &str {
        ACCESSORS[self as usize](record)
    }

    /// Resolve a field from its wire name or its default header label.
    /// Matching is exact; anything else is `None`.
    pub fn from_name(name: &str) -> Option<EmployeeField> {
        EmployeeField::ALL
            .into_iter()
            .find(|f| f.name() == name || f.default_label() == name)
    }
}

impl std::str::FromStr for EmployeeField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| format!("Unknown employee field: {}", s))
    }
}

impl fmt::Display for EmployeeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
