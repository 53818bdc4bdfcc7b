use pretty_assertions::assert_eq;
use realty_core_lead_contracts::{LeadService, LeadValidationError};
use realty_core_phone_contracts::MockPhoneService;
use realty_demo::{BAR_FORM, BAR_SUBMISSION, FOO_FORM, FOO_SUBMISSION};
use realty_models::lead::{LeadForm, LEAD_MESSAGE_MAX_CHARS};
use realty_utils::assert_matches;

use crate::{tests::Sut, LeadServiceImpl};

#[test]
fn ok_without_whatsapp() {
    // Arrange
    let phone = MockPhoneService::new().with_is_valid(FOO_FORM.mobile.clone(), true);

    let sut = LeadServiceImpl {
        phone,
        ..Sut::default()
    };

    // Act
    let result = sut.validate(&FOO_FORM);

    // Assert
    assert_eq!(result.unwrap(), *FOO_SUBMISSION);
}

#[test]
fn ok_with_whatsapp() {
    // Arrange
    let phone = MockPhoneService::new()
        .with_is_valid(BAR_FORM.mobile.clone(), true)
        .with_is_valid(BAR_FORM.whatsapp.clone(), true);

    let sut = LeadServiceImpl {
        phone,
        ..Sut::default()
    };

    // Act
    let result = sut.validate(&BAR_FORM);

    // Assert
    assert_eq!(result.unwrap(), *BAR_SUBMISSION);
}

#[test]
fn email_checked_first() {
    // Arrange
    let form = LeadForm {
        name: String::new(),
        email: "foo.example.com".into(),
        ..FOO_FORM.clone()
    };

    let sut = Sut::default();

    // Act
    let result = sut.validate(&form);

    // Assert
    assert_matches!(result, Err(LeadValidationError::InvalidEmail));
}

#[test]
fn empty_email() {
    // Arrange
    let form = LeadForm {
        email: String::new(),
        ..FOO_FORM.clone()
    };

    let sut = Sut::default();

    // Act
    let result = sut.validate(&form);

    // Assert
    assert_matches!(result, Err(LeadValidationError::InvalidEmail));
}

#[test]
fn missing_required_fields() {
    let mut without_mobile = FOO_FORM.clone();
    without_mobile.mobile.clear();

    for form in [
        LeadForm {
            name: String::new(),
            ..FOO_FORM.clone()
        },
        without_mobile,
        LeadForm {
            message: String::new(),
            ..FOO_FORM.clone()
        },
    ] {
        // Arrange
        let sut = Sut::default();

        // Act
        let result = sut.validate(&form);

        // Assert
        assert_matches!(result, Err(LeadValidationError::MissingRequiredFields));
    }
}

#[test]
fn message_too_long() {
    // Arrange
    let form = LeadForm {
        message: "x".repeat(LEAD_MESSAGE_MAX_CHARS + 1),
        ..FOO_FORM.clone()
    };

    let phone = MockPhoneService::new().with_is_valid(FOO_FORM.mobile.clone(), true);

    let sut = LeadServiceImpl {
        phone,
        ..Sut::default()
    };

    // Act
    let result = sut.validate(&form);

    // Assert
    assert_matches!(result, Err(LeadValidationError::MessageTooLong));
}

#[test]
fn phone_checked_before_message_length() {
    // Arrange
    let form = LeadForm {
        message: "x".repeat(LEAD_MESSAGE_MAX_CHARS + 1),
        ..BAR_FORM.clone()
    };

    for (mobile_valid, expected) in [
        (false, LeadValidationError::InvalidMobile),
        (true, LeadValidationError::InvalidWhatsapp),
    ] {
        let mut phone = MockPhoneService::new().with_is_valid(BAR_FORM.mobile.clone(), mobile_valid);
        if mobile_valid {
            phone = phone.with_is_valid(BAR_FORM.whatsapp.clone(), false);
        }

        let sut = LeadServiceImpl {
            phone,
            ..Sut::default()
        };

        // Act
        let result = sut.validate(&form);

        // Assert
        assert_eq!(result.unwrap_err(), expected);
    }
}

#[test]
fn invalid_mobile() {
    // Arrange
    let phone = MockPhoneService::new().with_is_valid(BAR_FORM.mobile.clone(), false);

    let sut = LeadServiceImpl {
        phone,
        ..Sut::default()
    };

    // Act
    let result = sut.validate(&BAR_FORM);

    // Assert
    assert_matches!(result, Err(LeadValidationError::InvalidMobile));
}

#[test]
fn invalid_whatsapp() {
    // Arrange
    let phone = MockPhoneService::new()
        .with_is_valid(BAR_FORM.mobile.clone(), true)
        .with_is_valid(BAR_FORM.whatsapp.clone(), false);

    let sut = LeadServiceImpl {
        phone,
        ..Sut::default()
    };

    // Act
    let result = sut.validate(&BAR_FORM);

    // Assert
    assert_matches!(result, Err(LeadValidationError::InvalidWhatsapp));
}

#[test]
fn error_messages() {
    for (error, expected) in [
        (
            LeadValidationError::InvalidEmail,
            "Please enter a valid email address.",
        ),
        (
            LeadValidationError::MissingRequiredFields,
            "Please fill in all required fields.",
        ),
        (
            LeadValidationError::InvalidMobile,
            "Please enter a valid mobile number for the selected country.",
        ),
        (
            LeadValidationError::InvalidWhatsapp,
            "Please enter a valid WhatsApp number.",
        ),
    ] {
        assert_eq!(error.to_string(), expected);
    }
}
