use crate::core::domain::entity::app_user::AppUser;
use crate::core::domain::page::PageRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Column {
    Province,
    City,
    Age,
}

impl Column {
    pub fn as_str(self) -> &'static str {
        match self {
            Column::Province => "province",
            Column::City => "city",
            Column::Age => "age",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    Text(String),
    Int(i32),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Equality {
    pub column: Column,
    pub value: FilterValue,
}

impl Equality {
    fn matches(&self, app_user: &AppUser) -> bool {
        match (self.column, &self.value) {
            (Column::Province, FilterValue::Text(v)) => app_user.province == *v,
            (Column::City, FilterValue::Text(v)) => app_user.city == *v,
            (Column::Age, FilterValue::Int(v)) => app_user.age == *v,
            _ => false,
        }
    }
}

/// Conjunction of equality predicates; empty means "match all rows".
///
/// Predicates are kept sorted by column so equal filters compare equal no
/// matter in which order their parameters were supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppUserFilter {
    predicates: Vec<Equality>,
}

impl AppUserFilter {
    pub fn and(mut self, column: Column, value: FilterValue) -> Self {
        self.predicates.retain(|p| p.column != column);
        self.predicates.push(Equality { column, value });
        self.predicates.sort_by_key(|p| p.column);
        self
    }

    pub fn predicates(&self) -> &[Equality] {
        &self.predicates
    }

    pub fn matches(&self, app_user: &AppUser) -> bool {
        self.predicates.iter().all(|p| p.matches(app_user))
    }

    pub fn paginate(self, page: PageRequest) -> AppUserSearch {
        AppUserSearch { filter: self, page }
    }
}

/// A filter bounded by a page; the only shape the query port executes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppUserSearch {
    pub filter: AppUserFilter,
    pub page: PageRequest,
}

fn present(raw: Option<&str>) -> Option<&str> {
    raw.filter(|v| !v.is_empty())
}

/// Builds the filter for find-many. A non-numeric `age` is ignored.
pub fn build_filter(
    province: Option<&str>,
    city: Option<&str>,
    age: Option<&str>,
) -> AppUserFilter {
    let mut filter = AppUserFilter::default();
    if let Some(province) = present(province) {
        filter = filter.and(Column::Province, FilterValue::Text(province.to_string()));
    }
    if let Some(city) = present(city) {
        filter = filter.and(Column::City, FilterValue::Text(city.to_string()));
    }
    if let Some(age) = present(age).and_then(|a| a.parse::<i32>().ok()) {
        filter = filter.and(Column::Age, FilterValue::Int(age));
    }
    filter
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str, province: &str, city: &str, age: i32) -> AppUser {
        AppUser {
            id: id.to_string(),
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            middle_name: None,
            gender: "FEMALE".to_string(),
            age,
            province: province.to_string(),
            city: city.to_string(),
        }
    }

    #[test]
    fn no_parameters_matches_everything() {
        let filter = build_filter(None, Some(""), None);

        assert!(filter.predicates().is_empty());
        assert!(filter.matches(&user("user001", "CA", "LA", 30)));
    }

    #[test]
    fn malformed_age_is_ignored() {
        assert_eq!(
            build_filter(Some("CA"), None, Some("thirty")),
            build_filter(Some("CA"), None, None)
        );
    }

    #[test]
    fn predicates_are_anded() {
        let filter = build_filter(Some("CA"), Some("LA"), Some("30"));

        assert_eq!(filter.predicates().len(), 3);
        assert!(filter.matches(&user("user001", "CA", "LA", 30)));
        assert!(!filter.matches(&user("user002", "CA", "SF", 30)));
        assert!(!filter.matches(&user("user003", "CA", "LA", 31)));
    }

    #[test]
    fn combination_order_does_not_matter() {
        let one = AppUserFilter::default()
            .and(Column::City, FilterValue::Text("LA".to_string()))
            .and(Column::Province, FilterValue::Text("CA".to_string()));
        let other = AppUserFilter::default()
            .and(Column::Province, FilterValue::Text("CA".to_string()))
            .and(Column::City, FilterValue::Text("LA".to_string()));

        assert_eq!(one, other);
        assert_eq!(one, build_filter(Some("CA"), Some("LA"), None));
    }

    #[test]
    fn paginate_keeps_filter_and_page() {
        let search = build_filter(None, Some("LA"), None).paginate(PageRequest::default());

        assert_eq!(search.page.limit(), 10);
        assert_eq!(search.filter.predicates()[0].column, Column::City);
    }
}
