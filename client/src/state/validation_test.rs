use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Field {
    A,
    B,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TestError {
    AMissing,
    AInvalid,
    BMissing,
}

const MSG: Bilingual = Bilingual::new("msg", "رسالة");

impl FieldError for TestError {
    type Field = Field;

    fn field(self) -> Field {
        match self {
            Self::AMissing | Self::AInvalid => Field::A,
            Self::BMissing => Field::B,
        }
    }

    fn message(self) -> Bilingual {
        MSG
    }
}

#[test]
fn default_is_empty_and_converts_to_ok() {
    let errors = FieldErrors::<TestError>::default();
    assert!(errors.is_empty());
    assert_eq!(errors.into_result(5), Ok(5));
}

#[test]
fn keeps_first_error_per_field() {
    let mut errors = FieldErrors::default();
    errors.push(TestError::AMissing);
    errors.push(TestError::AInvalid);
    errors.push(TestError::BMissing);
    assert_eq!(errors.len(), 2);
    assert_eq!(errors.for_field(Field::A), Some(TestError::AMissing));
    assert_eq!(errors.message_for(Field::B), Some(MSG));
}

#[test]
fn non_empty_converts_to_err() {
    let mut errors = FieldErrors::default();
    errors.push(TestError::BMissing);
    let err = errors.into_result(()).unwrap_err();
    assert_eq!(err.for_field(Field::A), None);
    assert_eq!(err.len(), 1);
}
