//! User-supplied project details written into the sheet header.

use serde::{Deserialize, Serialize};

/// The five free-text fields the details form collects. Independently
/// settable; no validation beyond presence checks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileFields {
    pub employee_name: String,
    pub employee_id: String,
    pub project_name: String,
    pub project_manager: String,
    pub division: String,
}

impl ProfileFields {
    pub fn get(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::EmployeeName => &self.employee_name,
            ProfileField::EmployeeId => &self.employee_id,
            ProfileField::ProjectName => &self.project_name,
            ProfileField::ProjectManager => &self.project_manager,
            ProfileField::Division => &self.division,
        }
    }

    pub fn set(&mut self, field: ProfileField, value: String) {
        match field {
            ProfileField::EmployeeName => self.employee_name = value,
            ProfileField::EmployeeId => self.employee_id = value,
            ProfileField::ProjectName => self.project_name = value,
            ProfileField::ProjectManager => self.project_manager = value,
            ProfileField::Division => self.division = value,
        }
    }

    /// Labels of fields still empty.
    pub fn missing(&self) -> Vec<&'static str> {
        ProfileField::ALL
            .into_iter()
            .filter(|field| self.get(*field).trim().is_empty())
            .map(|field| field.label())
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing().is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    EmployeeName,
    EmployeeId,
    ProjectName,
    ProjectManager,
    Division,
}

impl ProfileField {
    pub const ALL: [ProfileField; 5] = [
        ProfileField::EmployeeName,
        ProfileField::EmployeeId,
        ProfileField::ProjectName,
        ProfileField::ProjectManager,
        ProfileField::Division,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProfileField::EmployeeName => "Employee Name",
            ProfileField::EmployeeId => "Employee Id",
            ProfileField::ProjectName => "Project Name",
            ProfileField::ProjectManager => "Project Manager",
            ProfileField::Division => "Division",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_set_independently() {
        let mut profile = ProfileFields::default();
        profile.set(ProfileField::EmployeeName, "Vijay B".into());
        profile.set(ProfileField::Division, "Platform".into());

        assert_eq!(profile.employee_name, "Vijay B");
        assert_eq!(profile.division, "Platform");
        assert_eq!(profile.employee_id, "");
    }

    #[test]
    fn missing_reports_empty_fields() {
        let mut profile = ProfileFields::default();
        assert_eq!(profile.missing().len(), 5);
        assert!(!profile.is_complete());

        for field in ProfileField::ALL {
            profile.set(field, "x".into());
        }
        assert!(profile.is_complete());
    }

    #[test]
    fn unknown_json_keys_fall_back_to_defaults() {
        let profile: ProfileFields =
            serde_json::from_str(r#"{"employeeName":"V","stray":"ignored"}"#).unwrap();
        assert_eq!(profile.employee_name, "V");
        assert_eq!(profile.project_name, "");
    }
}
