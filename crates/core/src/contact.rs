//! Contact-form submission constants and validation.
//!
//! Defines the service and status option sets of the
//! `contact-form-submissions` collection, the coercion rule applied to
//! unknown service values, and the required-field normalization used by the
//! public submission endpoint.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Collection slug, shared with the admin UI and the route path.
pub const COLLECTION_SLUG: &str = "contact-form-submissions";

// ---------------------------------------------------------------------------
// Service options
// ---------------------------------------------------------------------------

pub const SERVICE_ADVISOR: &str = "advisor";
pub const SERVICE_LOANS: &str = "loans";
pub const SERVICE_PLANNING: &str = "planning";
pub const SERVICE_BUSINESS: &str = "business";
pub const SERVICE_INVESTMENTS: &str = "investments";
pub const SERVICE_INSURANCE: &str = "insurance";
/// Fallback for any service value the form sends that is not listed here.
pub const SERVICE_OTHER: &str = "other";

/// All valid service values, in display order.
pub const VALID_SERVICES: &[&str] = &[
    SERVICE_ADVISOR,
    SERVICE_LOANS,
    SERVICE_PLANNING,
    SERVICE_BUSINESS,
    SERVICE_INVESTMENTS,
    SERVICE_INSURANCE,
    SERVICE_OTHER,
];

// ---------------------------------------------------------------------------
// Status options
// ---------------------------------------------------------------------------

/// Status of every freshly submitted form, regardless of client input.
pub const STATUS_NEW: &str = "new";
pub const STATUS_IN_PROGRESS: &str = "in-progress";
pub const STATUS_COMPLETED: &str = "completed";

/// All valid submission statuses.
pub const VALID_STATUSES: &[&str] = &[STATUS_NEW, STATUS_IN_PROGRESS, STATUS_COMPLETED];

// ---------------------------------------------------------------------------
// Option labels
// ---------------------------------------------------------------------------

/// A select option as presented in the back office.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Human label for a service value, `None` for unknown values.
pub fn service_label(value: &str) -> Option<&'static str> {
    let label = match value {
        SERVICE_ADVISOR => "Asesoría Financiera",
        SERVICE_LOANS => "Préstamos Personales",
        SERVICE_PLANNING => "Planificación Patrimonial",
        SERVICE_BUSINESS => "Servicios para Empresas",
        SERVICE_INVESTMENTS => "Inversiones",
        SERVICE_INSURANCE => "Seguros Financieros",
        SERVICE_OTHER => "Otro",
        _ => return None,
    };
    Some(label)
}

/// Human label for a status value, `None` for unknown values.
pub fn status_label(value: &str) -> Option<&'static str> {
    let label = match value {
        STATUS_NEW => "Nuevo",
        STATUS_IN_PROGRESS => "En proceso",
        STATUS_COMPLETED => "Completado",
        _ => return None,
    };
    Some(label)
}

fn options(values: &[&'static str], label: fn(&str) -> Option<&'static str>) -> Vec<FieldOption> {
    values
        .iter()
        .filter_map(|v| label(v).map(|l| FieldOption { value: *v, label: l }))
        .collect()
}

/// Service select options with labels.
pub fn service_options() -> Vec<FieldOption> {
    options(VALID_SERVICES, service_label)
}

/// Status select options with labels.
pub fn status_options() -> Vec<FieldOption> {
    options(VALID_STATUSES, status_label)
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Check whether a service value is one of the known options.
pub fn is_valid_service(service: &str) -> bool {
    VALID_SERVICES.contains(&service)
}

/// Map a client-supplied service onto the option set.
///
/// Absent or blank values stay absent. Known values pass through. Anything
/// else becomes [`SERVICE_OTHER`].
pub fn coerce_service(service: Option<&str>) -> Option<&'static str> {
    let service = service.map(str::trim).filter(|s| !s.is_empty())?;
    let known = VALID_SERVICES
        .iter()
        .copied()
        .find(|v| *v == service)
        .unwrap_or(SERVICE_OTHER);
    Some(known)
}

/// Validate that a status string is one of the known statuses.
pub fn validate_status(status: &str) -> Result<(), CoreError> {
    if VALID_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid submission status '{status}'. Must be one of: {VALID_STATUSES:?}"
        )))
    }
}

/// Validate an optional service filter.
pub fn validate_service(service: &str) -> Result<(), CoreError> {
    if is_valid_service(service) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid service '{service}'. Must be one of: {VALID_SERVICES:?}"
        )))
    }
}

// ---------------------------------------------------------------------------
// Form normalization
// ---------------------------------------------------------------------------

/// Raw body of the public contact form.
///
/// Every field is optional at the wire level so a missing field can be told
/// apart from a malformed body. Unknown keys (including `status`) are
/// ignored.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ContactFormInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub service: Option<String>,
    pub message: Option<String>,
}

/// A contact form that passed validation, ready to be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub service: Option<String>,
    pub message: String,
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

impl TryFrom<ContactFormInput> for ContactForm {
    type Error = CoreError;

    /// Fails when `name`, `email` or `message` is absent or blank.
    fn try_from(input: ContactFormInput) -> Result<Self, Self::Error> {
        let (Some(name), Some(email), Some(message)) = (
            non_blank(input.name.as_deref()),
            non_blank(input.email.as_deref()),
            non_blank(input.message.as_deref()),
        ) else {
            return Err(CoreError::Validation("Missing required fields".into()));
        };

        Ok(ContactForm {
            name: name.to_string(),
            email: email.to_string(),
            phone: non_blank(input.phone.as_deref()).map(str::to_string),
            service: coerce_service(input.service.as_deref()).map(str::to_string),
            message: message.to_string(),
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn full_input() -> ContactFormInput {
        ContactFormInput {
            name: Some("Ana López".into()),
            email: Some("ana@example.com".into()),
            phone: Some("+34 600 000 000".into()),
            service: Some("loans".into()),
            message: Some("Quisiera información".into()),
        }
    }

    #[test]
    fn known_services_pass_through() {
        for s in VALID_SERVICES {
            assert_eq!(coerce_service(Some(s)), Some(*s));
        }
    }

    #[test]
    fn unknown_service_becomes_other() {
        assert_eq!(coerce_service(Some("xyz")), Some(SERVICE_OTHER));
        assert_eq!(coerce_service(Some("LOANS")), Some(SERVICE_OTHER));
    }

    #[test]
    fn blank_service_stays_absent() {
        assert_eq!(coerce_service(None), None);
        assert_eq!(coerce_service(Some("")), None);
        assert_eq!(coerce_service(Some("   ")), None);
    }

    #[test]
    fn all_statuses_are_valid() {
        for s in VALID_STATUSES {
            assert!(validate_status(s).is_ok(), "Status '{s}' should be valid");
        }
    }

    #[test]
    fn unknown_status_is_invalid() {
        assert!(validate_status("archived").is_err());
        assert!(validate_status("").is_err());
    }

    #[test]
    fn every_option_has_a_label() {
        assert_eq!(service_options().len(), VALID_SERVICES.len());
        assert_eq!(status_options().len(), VALID_STATUSES.len());
        assert_eq!(service_label(SERVICE_OTHER), Some("Otro"));
        assert_eq!(status_label(STATUS_IN_PROGRESS), Some("En proceso"));
        assert_eq!(service_label("xyz"), None);
    }

    #[test]
    fn complete_form_is_accepted() {
        let form = ContactForm::try_from(full_input()).unwrap();
        assert_eq!(form.name, "Ana López");
        assert_eq!(form.service.as_deref(), Some(SERVICE_LOANS));
        assert_eq!(form.phone.as_deref(), Some("+34 600 000 000"));
    }

    #[test]
    fn values_are_trimmed() {
        let mut input = full_input();
        input.name = Some("  Ana  ".into());
        input.phone = Some("   ".into());
        let form = ContactForm::try_from(input).unwrap();
        assert_eq!(form.name, "Ana");
        assert_eq!(form.phone, None);
    }

    #[test]
    fn missing_required_fields_are_rejected() {
        for field in ["name", "email", "message"] {
            let mut input = full_input();
            match field {
                "name" => input.name = None,
                "email" => input.email = Some(String::new()),
                _ => input.message = Some("  ".into()),
            }
            assert_matches!(
                ContactForm::try_from(input),
                Err(CoreError::Validation(msg)) if msg == "Missing required fields"
            );
        }
    }

    #[test]
    fn invalid_service_in_form_is_coerced() {
        let mut input = full_input();
        input.service = Some("crypto".into());
        let form = ContactForm::try_from(input).unwrap();
        assert_eq!(form.service.as_deref(), Some(SERVICE_OTHER));
    }
}
