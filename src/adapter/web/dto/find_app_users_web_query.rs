use crate::core::domain::page::UnvalidatedPageRequest;
use crate::core::port::find_app_users::FindAppUsersInput;

// Kept as raw strings: `age` must tolerate garbage and `page`/`size` report
// their own parse failures.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct FindAppUsersWebQuery {
    pub province: Option<String>,
    pub city: Option<String>,
    pub age: Option<String>,
    pub page: Option<String>,
    pub size: Option<String>,
}

impl FindAppUsersWebQuery {
    /// The first occurrence of a repeated key wins; unknown keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "province" => &mut query.province,
                "city" => &mut query.city,
                "age" => &mut query.age,
                "page" => &mut query.page,
                "size" => &mut query.size,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }
}

impl From<FindAppUsersWebQuery> for FindAppUsersInput {
    fn from(value: FindAppUsersWebQuery) -> Self {
        Self {
            province: value.province,
            city: value.city,
            age: value.age,
            page: UnvalidatedPageRequest {
                page: value.page,
                size: value.size,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn repeated_keys_keep_the_first_value() {
        let query = FindAppUsersWebQuery::from_pairs(pairs(&[
            ("province", "CA"),
            ("age", "abc"),
            ("province", "NY"),
            ("age", "def"),
        ]));

        assert_eq!(query.province.as_deref(), Some("CA"));
        assert_eq!(query.age.as_deref(), Some("abc"));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let query = FindAppUsersWebQuery::from_pairs(pairs(&[("sort", "age"), ("size", "20")]));

        assert_eq!(
            query,
            FindAppUsersWebQuery {
                size: Some("20".to_string()),
                ..Default::default()
            }
        );
    }
}
