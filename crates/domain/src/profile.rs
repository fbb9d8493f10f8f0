use crate::{BirthDate, BodyWeight, Email, Field, FieldErrors, Gender, Height, Name, NumberInput};

/// Raw input of the customer profile form.
///
/// Optional text fields that are blank count as not given.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ProfileForm {
    pub name: String,
    pub email: String,
    pub birthdate: Option<String>,
    pub gender: Option<String>,
    pub height: Option<NumberInput>,
    pub weight: Option<NumberInput>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CustomerProfile {
    pub name: Name,
    pub email: Email,
    pub birthdate: Option<BirthDate>,
    pub gender: Option<Gender>,
    pub height: Option<Height>,
    pub weight: Option<BodyWeight>,
}

impl CustomerProfile {
    pub fn validate(form: &ProfileForm) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new();

        let name = errors.check(Field::Name, Name::new(&form.name));
        let email = errors.check(Field::Email, Email::new(&form.email));
        let birthdate = errors.check(
            Field::Birthdate,
            given(form.birthdate.as_deref())
                .map(BirthDate::new)
                .transpose(),
        );
        let gender = errors.check(
            Field::Gender,
            given(form.gender.as_deref())
                .map(Gender::try_from)
                .transpose(),
        );
        let height = errors.check(
            Field::Height,
            form.height
                .as_ref()
                .map_or(Ok(None), Height::parse),
        );
        let weight = errors.check(
            Field::Weight,
            form.weight
                .as_ref()
                .map_or(Ok(None), BodyWeight::parse),
        );

        match (name, email, birthdate, gender, height, weight) {
            (
                Some(name),
                Some(email),
                Some(birthdate),
                Some(gender),
                Some(height),
                Some(weight),
            ) if errors.is_empty() => Ok(Self {
                name,
                email,
                birthdate,
                gender,
                height,
                weight,
            }),
            _ => Err(errors),
        }
    }
}

fn given(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn form() -> ProfileForm {
        ProfileForm {
            name: "Sara Bianchi".to_string(),
            email: "sara@example.com".to_string(),
            ..ProfileForm::default()
        }
    }

    #[test]
    fn test_validate_minimal() {
        let profile = CustomerProfile::validate(&form()).unwrap();
        assert_eq!(profile.name.to_string(), "Sara Bianchi");
        assert_eq!(profile.birthdate, None);
        assert_eq!(profile.gender, None);
        assert_eq!(profile.height, None);
        assert_eq!(profile.weight, None);
    }

    #[test]
    fn test_validate_complete() {
        let profile = CustomerProfile::validate(&ProfileForm {
            birthdate: Some("1992-11-03".to_string()),
            gender: Some("F".to_string()),
            height: Some("168".into()),
            weight: Some(61.5.into()),
            ..form()
        })
        .unwrap();
        assert_eq!(
            profile.birthdate.map(NaiveDate::from),
            NaiveDate::from_ymd_opt(1992, 11, 3)
        );
        assert_eq!(profile.gender, Some(Gender::F));
        assert_eq!(profile.height.map(f32::from), Some(168.0));
        assert_eq!(profile.weight.map(f32::from), Some(61.5));
    }

    #[test]
    fn test_validate_blank_optional_fields() {
        let profile = CustomerProfile::validate(&ProfileForm {
            birthdate: Some(String::new()),
            gender: Some("  ".to_string()),
            height: Some("".into()),
            weight: Some(" ".into()),
            ..form()
        })
        .unwrap();
        assert_eq!(profile.birthdate, None);
        assert_eq!(profile.gender, None);
        assert_eq!(profile.height, None);
        assert_eq!(profile.weight, None);
    }

    #[rstest]
    #[case("1", true)]
    #[case("300", true)]
    #[case("0", false)]
    #[case("-5", false)]
    #[case("300.5", false)]
    #[case("300.000001", false)]
    #[case("abc", false)]
    fn test_validate_height(#[case] height: &str, #[case] valid: bool) {
        let result = CustomerProfile::validate(&ProfileForm {
            height: Some(height.into()),
            ..form()
        });
        assert_eq!(result.is_ok(), valid);
        if let Err(errors) = result {
            assert_eq!(errors.iter().count(), 1);
            assert!(errors.contains(Field::Height));
        }
    }

    #[rstest]
    #[case("M", true)]
    #[case("F", true)]
    #[case("Altro", true)]
    #[case("Maschio", false)]
    #[case("f", false)]
    fn test_validate_gender(#[case] gender: &str, #[case] valid: bool) {
        let result = CustomerProfile::validate(&ProfileForm {
            gender: Some(gender.to_string()),
            ..form()
        });
        assert_eq!(result.is_ok(), valid);
    }

    #[test]
    fn test_validate_reports_every_field() {
        let errors = CustomerProfile::validate(&ProfileForm {
            name: "S".to_string(),
            email: "sara".to_string(),
            birthdate: Some("03/11/1992".to_string()),
            gender: Some("X".to_string()),
            height: Some("alto".into()),
            weight: Some(900.0.into()),
        })
        .unwrap_err();
        assert_eq!(
            errors.iter().map(|(field, _)| field).collect::<Vec<_>>(),
            vec![
                Field::Name,
                Field::Email,
                Field::Birthdate,
                Field::Gender,
                Field::Height,
                Field::Weight
            ]
        );
        assert_eq!(
            errors.get(Field::Height),
            &["Il valore deve essere un numero".to_string()]
        );
        assert_eq!(
            errors.get(Field::Weight),
            &["Il valore deve essere maggiore di 0 e al massimo 500".to_string()]
        );
    }
}
