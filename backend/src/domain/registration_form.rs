//! Registration form domain logic.
//!
//! All business rules for the member registration form live here: per-field
//! input sanitization, the selectable date range, submit gating, and form
//! state lifecycle. The UI only handles presentation.
//!
//! Malformed input is silently coerced rather than rejected: disallowed
//! characters are stripped as the user types, and the submit action is
//! simply disabled while any field is empty. No validation error surfaces
//! at submission time.

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use shared::{MembershipDuration, PaymentMethod, RegistrationFormState};

use crate::domain::commands::members::RegisterMemberCommand;

/// Maximum number of digits kept in the phone field.
const PHONE_MAX_DIGITS: usize = 10;

/// Registration form service that handles all form-related business logic.
#[derive(Clone, Default)]
pub struct RegistrationService;

impl RegistrationService {
    pub fn new() -> Self {
        Self
    }

    /// Create a fresh form state with the visit date defaulting to today.
    pub fn create_form_state(today: NaiveDate) -> RegistrationFormState {
        RegistrationFormState {
            name: String::new(),
            phone: String::new(),
            visit_date: today.format("%Y-%m-%d").to_string(),
            duration: String::new(),
            payment_method: String::new(),
            amount_input: String::new(),
            is_submitting: false,
            error_message: None,
            success_message: None,
        }
    }

    /// Strip the characters the name field never accepts: `<`, `>`, `?`.
    pub fn sanitize_name(&self, input: &str) -> String {
        input.chars().filter(|c| !matches!(c, '<' | '>' | '?')).collect()
    }

    /// Keep digits only and truncate to 10 characters.
    pub fn sanitize_phone(&self, input: &str) -> String {
        input
            .chars()
            .filter(char::is_ascii_digit)
            .take(PHONE_MAX_DIGITS)
            .collect()
    }

    /// Keep digits only, yielding a non-negative integer buffer.
    pub fn sanitize_amount(&self, input: &str) -> String {
        input.chars().filter(char::is_ascii_digit).collect()
    }

    /// Whether the registration calendar offers this date.
    /// The range is [1900-01-01, today].
    pub fn is_selectable_date(&self, date: NaiveDate, today: NaiveDate) -> bool {
        date.year() >= 1900 && date <= today
    }

    /// Apply typed name input to the form state.
    pub fn set_name(&self, mut state: RegistrationFormState, input: &str) -> RegistrationFormState {
        state.name = self.sanitize_name(input);
        state
    }

    /// Apply typed phone input to the form state.
    pub fn set_phone(&self, mut state: RegistrationFormState, input: &str) -> RegistrationFormState {
        state.phone = self.sanitize_phone(input);
        state
    }

    /// Apply typed amount input to the form state.
    pub fn set_amount(&self, mut state: RegistrationFormState, input: &str) -> RegistrationFormState {
        state.amount_input = self.sanitize_amount(input);
        state
    }

    /// Apply a calendar selection; dates outside the selectable range are
    /// ignored, leaving the previous selection in place.
    pub fn set_visit_date(
        &self,
        mut state: RegistrationFormState,
        date: NaiveDate,
        today: NaiveDate,
    ) -> RegistrationFormState {
        if self.is_selectable_date(date, today) {
            state.visit_date = date.format("%Y-%m-%d").to_string();
        }
        state
    }

    /// Apply a duration selection; unknown labels are ignored.
    pub fn set_duration(&self, mut state: RegistrationFormState, label: &str) -> RegistrationFormState {
        if MembershipDuration::from_label(label).is_some() {
            state.duration = label.to_string();
        }
        state
    }

    /// Apply a payment method selection; unknown labels are ignored.
    pub fn set_payment_method(
        &self,
        mut state: RegistrationFormState,
        label: &str,
    ) -> RegistrationFormState {
        if PaymentMethod::from_label(label).is_some() {
            state.payment_method = label.to_string();
        }
        state
    }

    /// Whether the register action is enabled: all six fields non-empty.
    /// This gating is the only submission-time guard.
    pub fn can_submit(&self, state: &RegistrationFormState) -> bool {
        !state.name.is_empty()
            && !state.phone.is_empty()
            && !state.visit_date.is_empty()
            && !state.duration.is_empty()
            && !state.payment_method.is_empty()
            && !state.amount_input.is_empty()
    }

    /// Build a domain register command from a filled form.
    pub fn to_register_command(&self, state: &RegistrationFormState) -> Result<RegisterMemberCommand> {
        let visit_date = NaiveDate::parse_from_str(&state.visit_date, "%Y-%m-%d")
            .context("Invalid visit date in registration form")?;
        let duration = MembershipDuration::from_label(&state.duration)
            .ok_or_else(|| anyhow::anyhow!("Unknown duration: {}", state.duration))?;
        let payment_method = PaymentMethod::from_label(&state.payment_method)
            .ok_or_else(|| anyhow::anyhow!("Unknown payment method: {}", state.payment_method))?;
        let amount = self.parse_amount(&state.amount_input)?;

        Ok(RegisterMemberCommand {
            name: state.name.trim().to_string(),
            phone: state.phone.clone(),
            visit_date,
            duration,
            payment_method,
            amount,
        })
    }

    /// Parse the digits-only amount buffer.
    ///
    /// A sanitized buffer always yields a value: digit strings beyond
    /// `u32::MAX` saturate rather than fail. Only an empty or non-digit
    /// buffer (which `can_submit` gating or sanitization would have caught)
    /// reports an error.
    fn parse_amount(&self, input: &str) -> Result<u32> {
        if !input.is_empty() && input.chars().all(|c| c.is_ascii_digit()) {
            Ok(input.parse().unwrap_or(u32::MAX))
        } else {
            input.parse().context("Amount must be a non-negative integer")
        }
    }

    /// Set form state to submitting.
    pub fn set_form_submitting(&self, mut state: RegistrationFormState) -> RegistrationFormState {
        state.is_submitting = true;
        state.error_message = None;
        state
    }

    /// Set form state with an error (e.g. a storage failure bubbled up).
    pub fn set_form_error(
        &self,
        mut state: RegistrationFormState,
        error_message: String,
    ) -> RegistrationFormState {
        state.is_submitting = false;
        state.error_message = Some(error_message);
        state
    }

    /// Clear every field after a successful registration; the visit date
    /// returns to today.
    pub fn clear_form_after_success(
        &self,
        mut state: RegistrationFormState,
        success_message: String,
        today: NaiveDate,
    ) -> RegistrationFormState {
        state.name = String::new();
        state.phone = String::new();
        state.visit_date = today.format("%Y-%m-%d").to_string();
        state.duration = String::new();
        state.payment_method = String::new();
        state.amount_input = String::new();
        state.is_submitting = false;
        state.error_message = None;
        state.success_message = Some(success_message);
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_service() -> RegistrationService {
        RegistrationService::new()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, 15).unwrap()
    }

    fn filled_form(service: &RegistrationService) -> RegistrationFormState {
        let state = RegistrationService::create_form_state(today());
        let state = service.set_name(state, "Asha");
        let state = service.set_phone(state, "9876543210");
        let state = service.set_duration(state, "1 month");
        let state = service.set_payment_method(state, "Cash");
        service.set_amount(state, "500")
    }

    #[test]
    fn test_sanitize_name_strips_angle_brackets_and_question_marks() {
        let service = create_test_service();

        assert_eq!(service.sanitize_name("<script>bad?</script>"), "scriptbad/script");
        assert_eq!(service.sanitize_name("Asha Rao"), "Asha Rao");
        assert_eq!(service.sanitize_name("???"), "");
    }

    #[test]
    fn test_sanitize_phone_keeps_first_ten_digits() {
        let service = create_test_service();

        assert_eq!(service.sanitize_phone("12-34 abc 5678901"), "1234567890");
        assert_eq!(service.sanitize_phone("98765"), "98765");
        assert_eq!(service.sanitize_phone("no digits"), "");
    }

    #[test]
    fn test_sanitize_amount_keeps_digits_only() {
        let service = create_test_service();

        assert_eq!(service.sanitize_amount("500"), "500");
        assert_eq!(service.sanitize_amount("$5,00 "), "500");
        assert_eq!(service.sanitize_amount("-500"), "500");
        assert_eq!(service.sanitize_amount("abc"), "");
    }

    #[test]
    fn test_selectable_date_range() {
        let service = create_test_service();

        assert!(service.is_selectable_date(today(), today()));
        assert!(service.is_selectable_date(NaiveDate::from_ymd_opt(1900, 1, 1).unwrap(), today()));
        assert!(!service.is_selectable_date(NaiveDate::from_ymd_opt(1899, 12, 31).unwrap(), today()));
        assert!(!service.is_selectable_date(NaiveDate::from_ymd_opt(2025, 7, 16).unwrap(), today()));
    }

    #[test]
    fn test_set_visit_date_ignores_out_of_range() {
        let service = create_test_service();
        let state = RegistrationService::create_form_state(today());

        let state = service.set_visit_date(state, NaiveDate::from_ymd_opt(2025, 7, 16).unwrap(), today());
        assert_eq!(state.visit_date, "2025-07-15");

        let state = service.set_visit_date(state, NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(), today());
        assert_eq!(state.visit_date, "2025-07-01");
    }

    #[test]
    fn test_select_setters_ignore_unknown_labels() {
        let service = create_test_service();
        let state = RegistrationService::create_form_state(today());

        let state = service.set_duration(state, "2 months");
        assert_eq!(state.duration, "");
        let state = service.set_duration(state, "3 months");
        assert_eq!(state.duration, "3 months");

        let state = service.set_payment_method(state, "Card");
        assert_eq!(state.payment_method, "");
        let state = service.set_payment_method(state, "Online");
        assert_eq!(state.payment_method, "Online");
    }

    #[test]
    fn test_can_submit_requires_every_field() {
        let service = create_test_service();

        let state = RegistrationService::create_form_state(today());
        assert!(!service.can_submit(&state));

        let full = filled_form(&service);
        assert!(service.can_submit(&full));

        let missing_duration = RegistrationFormState {
            duration: String::new(),
            ..full.clone()
        };
        assert!(!service.can_submit(&missing_duration));

        let missing_amount = RegistrationFormState {
            amount_input: String::new(),
            ..full
        };
        assert!(!service.can_submit(&missing_amount));
    }

    #[test]
    fn test_to_register_command() {
        let service = create_test_service();
        let state = filled_form(&service);

        let command = service.to_register_command(&state).unwrap();

        assert_eq!(command.name, "Asha");
        assert_eq!(command.phone, "9876543210");
        assert_eq!(command.visit_date, today());
        assert_eq!(command.duration, shared::MembershipDuration::OneMonth);
        assert_eq!(command.payment_method, shared::PaymentMethod::Cash);
        assert_eq!(command.amount, 500);
    }

    #[test]
    fn test_oversized_amount_saturates_instead_of_failing() {
        let service = create_test_service();
        let state = filled_form(&service);

        // Twenty digits: far past u32::MAX, but still a submittable buffer.
        let state = service.set_amount(state, "99999999999999999999");
        assert!(service.can_submit(&state));

        let command = service.to_register_command(&state).unwrap();
        assert_eq!(command.amount, u32::MAX);
    }

    #[test]
    fn test_unsanitized_amount_buffer_is_rejected() {
        let service = create_test_service();

        let state = RegistrationFormState {
            amount_input: "5x0".to_string(),
            ..filled_form(&service)
        };
        assert!(service.to_register_command(&state).is_err());

        let state = RegistrationFormState {
            amount_input: String::new(),
            ..filled_form(&service)
        };
        assert!(service.to_register_command(&state).is_err());
    }

    #[test]
    fn test_form_state_lifecycle() {
        let service = create_test_service();
        let state = filled_form(&service);

        let submitting = service.set_form_submitting(state);
        assert!(submitting.is_submitting);
        assert!(submitting.error_message.is_none());

        let errored = service.set_form_error(submitting, "storage failed".to_string());
        assert!(!errored.is_submitting);
        assert_eq!(errored.error_message.as_deref(), Some("storage failed"));

        let cleared = service.clear_form_after_success(errored, "Registered Asha".to_string(), today());
        assert_eq!(cleared.name, "");
        assert_eq!(cleared.phone, "");
        assert_eq!(cleared.duration, "");
        assert_eq!(cleared.payment_method, "");
        assert_eq!(cleared.amount_input, "");
        assert_eq!(cleared.visit_date, "2025-07-15");
        assert!(!cleared.is_submitting);
        assert!(cleared.error_message.is_none());
        assert_eq!(cleared.success_message.as_deref(), Some("Registered Asha"));
    }
}
