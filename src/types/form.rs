use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{FormError, NewUser, UserFilter};

/// Raw registration/edit form fields, exactly as a browser submits them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserForm {
    pub name: String,
    pub year: String,
    pub month: String,
    pub day: String,
    pub tel: String,
    #[serde(rename = "type")]
    pub category: String,
    pub comment: String,
}

/// Raw search form fields. Blank fields are not applied.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchForm {
    pub name: String,
    pub year: String,
    #[serde(rename = "type")]
    pub category: String,
}

fn parse_field<T: FromStr>(field: &'static str, value: &str) -> Result<T, FormError> {
    value.trim().parse().map_err(|_| FormError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}

fn non_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

impl UserForm {
    pub fn into_new_user(self) -> Result<NewUser, FormError> {
        if self.name.trim().is_empty() {
            return Err(FormError::MissingName);
        }
        let year: i32 = parse_field("year", &self.year)?;
        let month: u32 = parse_field("month", &self.month)?;
        let day: u32 = parse_field("day", &self.day)?;
        let birthdate = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(FormError::InvalidDate { year, month, day })?;
        let category: i32 = parse_field("type", &self.category)?;
        let comment = if self.comment.is_empty() {
            None
        } else {
            Some(self.comment)
        };

        Ok(NewUser {
            name: self.name,
            birthdate,
            phone: self.tel,
            category,
            comment,
        })
    }
}

impl SearchForm {
    pub fn into_filter(self) -> Result<UserFilter, FormError> {
        let mut filter = UserFilter::new();
        if let Some(name) = non_blank(&self.name) {
            filter = filter.with_name(name);
        }
        if let Some(year) = non_blank(&self.year) {
            if !year.chars().all(|c| c.is_ascii_digit()) {
                return Err(FormError::InvalidYearFilter(year.to_string()));
            }
            filter = filter.with_birth_year(year);
        }
        if let Some(category) = non_blank(&self.category) {
            filter = filter.with_category(parse_field("type", category)?);
        }
        Ok(filter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aoi_form() -> UserForm {
        UserForm {
            name: "Aoi".into(),
            year: "1990".into(),
            month: "5".into(),
            day: "1".into(),
            tel: "090-0000-0000".into(),
            category: "1".into(),
            comment: "test".into(),
        }
    }

    #[test]
    fn form_maps_to_new_user() {
        let user = aoi_form().into_new_user().unwrap();
        assert_eq!(user.name, "Aoi");
        assert_eq!(user.birthdate, NaiveDate::from_ymd_opt(1990, 5, 1).unwrap());
        assert_eq!(user.phone, "090-0000-0000");
        assert_eq!(user.category, 1);
        assert_eq!(user.comment.as_deref(), Some("test"));
    }

    #[test]
    fn empty_comment_becomes_none() {
        let form = UserForm {
            comment: String::new(),
            ..aoi_form()
        };
        assert_eq!(form.into_new_user().unwrap().comment, None);
    }

    #[test]
    fn blank_name_is_rejected() {
        let form = UserForm {
            name: "   ".into(),
            ..aoi_form()
        };
        assert_eq!(form.into_new_user(), Err(FormError::MissingName));
    }

    #[test]
    fn impossible_date_is_rejected() {
        let form = UserForm {
            month: "2".into(),
            day: "30".into(),
            ..aoi_form()
        };
        assert_eq!(
            form.into_new_user(),
            Err(FormError::InvalidDate {
                year: 1990,
                month: 2,
                day: 30
            })
        );
    }

    #[test]
    fn non_numeric_type_is_rejected() {
        let form = UserForm {
            category: "gold".into(),
            ..aoi_form()
        };
        assert_eq!(
            form.into_new_user(),
            Err(FormError::InvalidNumber {
                field: "type",
                value: "gold".into()
            })
        );
    }

    #[test]
    fn blank_search_form_is_empty_filter() {
        let filter = SearchForm::default().into_filter().unwrap();
        assert!(filter.is_empty());
    }

    #[test]
    fn search_form_keeps_category_zero() {
        let form = SearchForm {
            name: " Tanaka ".into(),
            year: "1990".into(),
            category: "0".into(),
        };
        let filter = form.into_filter().unwrap();
        assert_eq!(filter.name.as_deref(), Some("Tanaka"));
        assert_eq!(filter.birth_year.as_deref(), Some("1990"));
        assert_eq!(filter.category, Some(0));
    }

    #[test]
    fn search_form_rejects_non_digit_year() {
        let form = SearchForm {
            year: "19%".into(),
            ..SearchForm::default()
        };
        assert_eq!(
            form.into_filter(),
            Err(FormError::InvalidYearFilter("19%".into()))
        );
    }
}
